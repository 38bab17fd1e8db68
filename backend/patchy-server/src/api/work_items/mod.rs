pub mod create_work_item_request;
pub mod update_work_item_request;
pub mod work_item_dto;
pub mod work_item_patch;
pub mod work_item_preview_response;
pub mod work_item_response;
pub mod work_item_rules;
pub mod work_item_update_response;
pub mod work_items;
