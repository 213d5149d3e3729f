use clap::Parser;

/// The default directory from which public assets, including uploads, are served.
const DEFAULT_PUBLIC_PATH: &str = "public";
/// The default address to listen on.
const DEFAULT_ADDRESS: &str = "0.0.0.0:3000";
/// Maximum accepted request body size, in bytes. Uploads are buffered in memory.
pub const MAX_BODY_SIZE: usize = 50_000_000;

#[derive(Debug, Parser)]
#[command(name = "staffdesk", version = "0.1", about = "Employee and timesheet tracking", long_about = None)]
pub struct StartArgs {
    /// Database URL.
    #[arg(short, long)]
    db_url: Option<String>,

    /// RUST_LOG string to use as the env filter.
    #[arg(short, long)]
    log: Option<String>,

    /// Directory served publicly. Uploads are stored in its `uploads` subdirectory.
    #[arg(short, long)]
    public_path: Option<String>,

    /// Address to listen on.
    #[arg(short, long)]
    address: Option<String>,

    /// CORS allowed origins.
    #[arg(long)]
    cors_allowed_origins: Option<String>,
}

/// Implement a getter method on [StartArgs], using the `$var` environment variable as a fallback
/// and either panic or default if neither the argument nor the environment variable is set.
macro_rules! arg {
    ($id:ident, $var:literal, panic $msg:literal) => {
        impl StartArgs {
            pub fn $id(&self) -> String {
                match &self.$id {
                    Some(val) => val.to_string(),
                    None => match std::env::var($var) {
                        Ok(val) => val,
                        Err(_) => panic!($msg),
                    },
                }
            }
        }
    };
    ($id:ident, $var:literal, default $value:expr) => {
        impl StartArgs {
            pub fn $id(&self) -> String {
                match &self.$id {
                    Some(val) => val.to_string(),
                    None => match std::env::var($var) {
                        Ok(val) => val,
                        Err(_) => $value,
                    },
                }
            }
        }
    };
}

impl StartArgs {
    /// Origins allowed by the CORS layer. Empty unless configured.
    pub fn allowed_origins(&self) -> Vec<String> {
        let origins = match &self.cors_allowed_origins {
            Some(origins) => origins.clone(),
            None => std::env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default(),
        };
        parse_origins(&origins)
    }
}

fn parse_origins(origins: &str) -> Vec<String> {
    origins
        .split(',')
        .map(str::trim)
        .filter_map(|o| (!o.is_empty()).then_some(String::from(o)))
        .collect()
}

arg!(db_url,          "DATABASE_URL",    panic   "Database url not found; Pass --db-url or set DATABASE_URL");
arg!(log,             "RUST_LOG",        default "info".to_string());
arg!(public_path,     "PUBLIC_PATH",     default DEFAULT_PUBLIC_PATH.to_string());
arg!(address,         "ADDRESS",         default DEFAULT_ADDRESS.to_string());
