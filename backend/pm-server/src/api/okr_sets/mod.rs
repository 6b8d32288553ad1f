pub mod create_okr_set_request;
pub mod okr_sets;
pub mod update_okr_set_request;
