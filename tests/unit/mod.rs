mod test_config;
mod test_context;
mod test_error;
mod test_models;
