pub mod get_ebooks_cmd;
