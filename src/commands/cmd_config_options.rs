use crate::config;
use crate::vars::ENV_CONFIG;

pub fn show_config_options() {
    let docstring = config::commented_fields()
        // replacing option with a hint for people that dont know rust
        .replace("Option<", "Optional<");

    println!(r#"ENV {config_env}: {config_path:?}

DEFAULT CONFIG FILE: {default_path:?}

--- EXAMPLE CONFIG FILE ---
version = "1"
host = "localhost"
timeout = 2.5

[reload]
port = {reload_port}

[restart]
port = {restart_port}
--- EXAMPLE CONFIG FILE ---

--- CONFIG OPTIONS ---
{docstring}
--- CONFIG OPTIONS ---
"#,
        config_env=ENV_CONFIG,
        config_path=std::env::var(ENV_CONFIG).ok(),
        default_path=config::default_config_path(),
        reload_port=crate::vars::RELOAD_PORT,
        restart_port=crate::vars::RESTART_PORT,
    );
}
