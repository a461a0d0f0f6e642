mod actions;

pub(crate) use actions::handle_schema_command;
