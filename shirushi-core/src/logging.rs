use crate::{config::Config, errors::Error, types};

pub fn setup_logging() -> types::Result<()> {
    let config_dir = Config::get_config_dir()?;
    let log_config_filename = format!("{}/log4rs.yml", config_dir);

    log4rs::init_file(&log_config_filename, Default::default()).map_err(|e| {
        Error::LoggingInitFailed {
            message: format!("log config: '{}'", log_config_filename),
            source: e,
        }
    })?;

    Ok(())
}
