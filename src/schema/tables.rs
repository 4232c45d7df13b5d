//! Column definitions for every kind, as found in the cache 221.7 definition dumps.
//!
//! Adding a cache key is an edit here: DDL, inserts, scans, responses and the
//! lookup table all follow this list.

use super::types::{Column, EntitySchema, Kind, Strategy};

// Unnamed definitions carry the literal name "null", so `name` matches exactly on
// that token and by substring otherwise.
const NAME: Column = Column::text("name", "name").lookup(Strategy::Conditional);

pub static ITEMS: EntitySchema = EntitySchema {
    kind: Kind::Item,
    table: "items",
    source_dir: "item_defs",
    columns: &[
        Column::int("id", "id"),
        NAME,
        Column::text("examine", "examine"),
        Column::int("resize_x", "resizeX"),
        Column::int("resize_y", "resizeY"),
        Column::int("resize_z", "resizeZ"),
        Column::int("xan2d", "xan2D").alias(&["xan2d"]),
        Column::int("yan2d", "yan2D").alias(&["yan2d"]),
        Column::int("zan2d", "zan2D").alias(&["zan2d"]),
        Column::int("cost", "cost"),
        Column::flag("is_tradable", "isTradable").alias(&["isTradeable"]),
        Column::int("stackable", "stackable"),
        Column::int("inventory_model", "inventoryModel"),
        Column::int("wear_pos_1", "wearPos1"),
        Column::int("wear_pos_2", "wearPos2"),
        Column::int("wear_pos_3", "wearPos3"),
        Column::flag("members", "members"),
        Column::int("zoom_2d", "zoom2D").alias(&["zoom2d"]),
        Column::int("x_offset_2d", "xOffset2d"),
        Column::int("y_offset_2d", "yOffset2d"),
        Column::int("ambient", "ambient"),
        Column::int("contrast", "contrast"),
        Column::text_list("options", "options"),
        Column::text_list("interface_options", "interfaceOptions"),
        Column::int("male_model_0", "maleModel0"),
        Column::int("male_model_1", "maleModel1"),
        Column::int("male_model_2", "maleModel2"),
        Column::int("male_offset", "maleOffset"),
        Column::int("male_head_model", "maleHeadModel"),
        Column::int("male_head_model_2", "maleHeadModel2"),
        Column::int("female_model_0", "femaleModel0"),
        Column::int("female_model_1", "femaleModel1"),
        Column::int("female_model_2", "femaleModel2"),
        Column::int("female_offset", "femaleOffset"),
        Column::int("female_head_model", "femaleHeadModel"),
        Column::int("female_head_model_2", "femaleHeadModel2"),
        Column::int("noted_id", "notedID"),
        Column::int("noted_template", "notedTemplate"),
        Column::int("team", "team"),
        Column::int("weight", "weight"),
        Column::int("shift_click_drop_index", "shiftClickDropIndex"),
        Column::int("bought_id", "boughtId"),
        Column::int("bought_template_id", "boughtTemplateId"),
        Column::int("placeholder_id", "placeholderId"),
        Column::int("placeholder_template_id", "placeholderTemplateId"),
        Column::int_list("color_find", "colorFind"),
        Column::int_list("color_replace", "colorReplace"),
        Column::params("params", "params"),
        Column::int_list("count_co", "countCo"),
        Column::int_list("count_obj", "countObj"),
        Column::int_list("texture_find", "textureFind"),
        Column::int_list("texture_replace", "textureReplace"),
        Column::int("category", "category"),
    ],
};

pub static NPCS: EntitySchema = EntitySchema {
    kind: Kind::Npc,
    table: "npcs",
    source_dir: "npc_defs",
    columns: &[
        Column::int("id", "id"),
        NAME,
        Column::int("size", "size"),
        Column::int_list("models", "models"),
        Column::int_list("chathead_models", "chatheadModels"),
        Column::int("standing_animation", "standingAnimation"),
        Column::int("idle_rotate_left_animation", "idleRotateLeftAnimation"),
        Column::int("idle_rotate_right_animation", "idleRotateRightAnimation"),
        Column::int("walking_animation", "walkingAnimation"),
        Column::int("rotate_left_animation", "rotateLeftAnimation"),
        Column::int("rotate_right_animation", "rotateRightAnimation"),
        Column::int("run_animation", "runAnimation"),
        Column::int("run_rotate_180_animation", "runRotate180Animation"),
        Column::int("run_rotate_left_animation", "runRotateLeftAnimation"),
        Column::int("run_rotate_right_animation", "runRotateRightAnimation"),
        Column::int("crawl_animation", "crawlAnimation"),
        Column::int("crawl_rotate_180_animation", "crawlRotate180Animation"),
        Column::int("crawl_rotate_left_animation", "crawlRotateLeftAnimation"),
        Column::int("crawl_rotate_right_animation", "crawlRotateRightAnimation"),
        Column::text_list("actions", "actions"),
        Column::flag("is_minimap_visible", "isMinimapVisible"),
        Column::int("combat_level", "combatLevel"),
        Column::int("width_scale", "widthScale"),
        Column::int("height_scale", "heightScale"),
        Column::flag("has_render_priority", "hasRenderPriority"),
        Column::int("ambient", "ambient"),
        Column::int("contrast", "contrast"),
        Column::int_list("head_icon_sprite_index", "headIconSpriteIndex"),
        Column::int_list("head_icon_archive_ids", "headIconArchiveIds"),
        Column::int("rotation_speed", "rotationSpeed"),
        Column::int("varbit_id", "varbitId"),
        Column::int("varp_index", "varpIndex"),
        Column::flag("is_interactable", "isInteractable"),
        Column::flag("rotation_flag", "rotationFlag"),
        Column::flag("is_pet", "isPet"),
        Column::int_list("configs", "configs"),
        Column::params("params", "params"),
        Column::int("category", "category"),
        Column::int_list("recolor_to_find", "recolorToFind"),
        Column::int_list("recolor_to_replace", "recolorToReplace"),
        Column::int_list("retexture_to_find", "retextureToFind"),
        Column::int_list("retexture_to_replace", "retextureToReplace"),
        Column::flag("is_follower", "isFollower"),
        Column::flag("low_priority_follower_ops", "lowPriorityFollowerOps"),
    ],
};

pub static OBJECTS: EntitySchema = EntitySchema {
    kind: Kind::Object,
    table: "objects",
    source_dir: "object_defs",
    columns: &[
        Column::int("id", "id"),
        NAME,
        Column::int("decor_displacement", "decorDisplacement"),
        Column::flag("is_hollow", "isHollow"),
        Column::int_list("object_models", "objectModels"),
        Column::int_list("object_types", "objectTypes"),
        Column::int("map_area_id", "mapAreaId"),
        Column::int("size_x", "sizeX"),
        Column::int("size_y", "sizeY"),
        Column::int("offset_x", "offsetX"),
        Column::int("offset_y", "offsetY"),
        Column::int("offset_height", "offsetHeight"),
        Column::flag("merge_normals", "mergeNormals"),
        Column::int("wall_or_door", "wallOrDoor"),
        Column::int("animation_id", "animationID"),
        Column::int("varbit_id", "varbitID"),
        Column::int("ambient", "ambient"),
        Column::int("contrast", "contrast"),
        Column::int_list("recolor_to_find", "recolorToFind"),
        Column::int_list("recolor_to_replace", "recolorToReplace"),
        Column::int_list("retexture_to_find", "retextureToFind"),
        Column::int_list("texture_to_replace", "textureToReplace"),
        Column::text_list("actions", "actions"),
        Column::int("interact_type", "interactType"),
        Column::int("map_scene_id", "mapSceneID"),
        Column::int("blocking_mask", "blockingMask"),
        Column::flag("shadow", "shadow"),
        Column::int("model_size_x", "modelSizeX"),
        Column::int("model_size_y", "modelSizeY"),
        Column::int("model_size_height", "modelSizeHeight"),
        Column::int("object_id", "objectID"),
        Column::flag("obstructs_ground", "obstructsGround"),
        Column::int("contoured_ground", "contouredGround"),
        Column::int("supports_items", "supportsItems"),
        Column::int_list("config_change_dest", "configChangeDest"),
        Column::int("category", "category"),
        Column::flag("is_rotated", "isRotated"),
        Column::int("varp_id", "varpID"),
        Column::int("ambient_sound_id", "ambientSoundId"),
        Column::int_list("ambient_sound_ids", "ambientSoundIds"),
        Column::int("ambient_sound_retain", "ambientSoundRetain"),
        Column::int("ambient_sound_distance", "ambientSoundDistance"),
        Column::int("ambient_sound_change_ticks_min", "ambientSoundChangeTicksMin"),
        Column::int("ambient_sound_change_ticks_max", "ambientSoundChangeTicksMax"),
        Column::params("params", "params"),
        Column::flag("a_bool_2111", "aBool2111"),
        Column::flag("blocks_projectile", "blocksProjectile"),
        Column::flag("randomize_anim_start", "randomizeAnimStart"),
    ],
};
