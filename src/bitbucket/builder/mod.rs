pub mod create_pull_request_builder;
