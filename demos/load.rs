use dragon_env::{Config, Field, Registry, ValidationError};
use tracing_subscriber::EnvFilter;

dragon_env::config_struct! {
    #[derive(Debug)]
    struct AppConfig {
        #[tag(env = "APP_NAME", validate = "required,min=10")]
        app_name: String,
        #[tag(env = "PORT", validate = "required,max=65535")]
        port: u16,
        #[tag(env = "DEBUG")]
        debug: bool,
        #[tag(env = "DATABASE_URL", validate = "required,url")]
        database_url: String,
        #[tag(env = "API_KEY", validate = "required,min=10,no_spaces")]
        api_key: String,
        #[tag(env = "LOG_LEVEL", validate = "in=trace|debug|info|warn|error")]
        log_level: String,
        #[tag(env = "SMTP_HOST")]
        smtp_host: String,
        #[tag(env = "SMTP_PORT", validate = "min=1,max=65535")]
        smtp_port: u16,
        #[tag(env = "ADMIN_EMAIL", validate = "email")]
        admin_email: String,
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "Default App Name".into(),
            port: 8080,
            debug: false,
            database_url: "postgres://localhost:5432/defaultdb".into(),
            api_key: "default-api-key".into(),
            log_level: "info".into(),
            smtp_host: "localhost".into(),
            smtp_port: 587,
            admin_email: "admin@localhost".into(),
        }
    }
}

fn no_spaces(field: &Field<'_>, _: Option<&str>) -> Result<(), ValidationError> {
    match field.value() {
        dragon_env::Value::String(s) if s.contains(' ') => Err(ValidationError::custom(format!(
            "field '{}' must not contain spaces",
            field.name()
        ))),
        _ => Ok(()),
    }
}

fn main() -> Result<(), dragon_env::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut registry = Registry::new();
    registry.register("no_spaces", no_spaces);

    println!("Loading configuration...");
    println!("Priority order: environment > .env file > demos/config.toml > defaults");
    println!();

    let config: AppConfig = Config::builder()
        .with_file("demos/config.toml", false)
        .with_env_file(".env")
        .with_env()
        .with_registry(registry)
        .build()?;

    println!("Loaded configuration:");
    println!("  App Name:     {}", config.app_name);
    println!("  Port:         {}", config.port);
    println!("  Debug:        {}", config.debug);
    println!("  Database URL: {}", config.database_url);
    println!("  API Key:      {}", config.api_key);
    println!("  Log Level:    {}", config.log_level);
    println!("  SMTP Host:    {}", config.smtp_host);
    println!("  SMTP Port:    {}", config.smtp_port);
    println!("  Admin Email:  {}", config.admin_email);

    Ok(())
}
