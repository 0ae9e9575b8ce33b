pub mod add_item_cmd;
pub mod available_items_cmd;
pub mod items_by_author_cmd;
pub mod remove_item_cmd;
