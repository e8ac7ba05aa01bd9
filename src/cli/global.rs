use clap::Args;

/// Docker CLI global options.
///
/// The Docker CLI passes these to a plugin ahead of the plugin's command name.
/// They are collected here and re-emitted in front of every engine invocation.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalArgs {
    /// Location of client config files
    #[arg(long, value_name = "DIR")]
    pub config: Option<String>,

    /// Name of the context to use to connect to the daemon
    #[arg(long, short = 'c', value_name = "CONTEXT")]
    pub context: Option<String>,

    /// Daemon socket to connect to
    #[arg(long, short = 'H', value_name = "HOST")]
    pub host: Vec<String>,

    /// Set the logging level of the docker CLI
    #[arg(long, short = 'l', value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Enable debug mode
    #[arg(long, short = 'D')]
    pub debug: bool,

    /// Use TLS; implied by --tlsverify
    #[arg(long)]
    pub tls: bool,

    /// Use TLS and verify the remote
    #[arg(long)]
    pub tlsverify: bool,

    /// Trust certs signed only by this CA
    #[arg(long, value_name = "PATH")]
    pub tlscacert: Option<String>,

    /// Path to TLS certificate file
    #[arg(long, value_name = "PATH")]
    pub tlscert: Option<String>,

    /// Path to TLS key file
    #[arg(long, value_name = "PATH")]
    pub tlskey: Option<String>,
}

impl GlobalArgs {
    /// Canonical `--name=value` form, in a fixed order
    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        for (name, value) in [("config", &self.config), ("context", &self.context)] {
            if let Some(value) = value {
                args.push(format!("--{name}={value}"));
            }
        }
        args.extend(self.host.iter().map(|host| format!("--host={host}")));
        if let Some(level) = &self.log_level {
            args.push(format!("--log-level={level}"));
        }
        if self.debug {
            args.push("--debug".to_string());
        }
        if self.tls {
            args.push("--tls".to_string());
        }
        if self.tlsverify {
            args.push("--tlsverify".to_string());
        }
        for (name, value) in [
            ("tlscacert", &self.tlscacert),
            ("tlscert", &self.tlscert),
            ("tlskey", &self.tlskey),
        ] {
            if let Some(value) = value {
                args.push(format!("--{name}={value}"));
            }
        }
        args
    }
}
