pub mod lend_item_cmd;
pub mod return_item_cmd;
