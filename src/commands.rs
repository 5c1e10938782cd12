mod cmd_trigger;
mod cmd_completion_generator;
mod cmd_config_options;

pub use cmd_trigger::trigger_action;
pub use cmd_completion_generator::shell_completion_generation;
pub use cmd_config_options::show_config_options;
