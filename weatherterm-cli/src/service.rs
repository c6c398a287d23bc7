//! launchd user-service installation.

use std::{env, fs};

use anyhow::{Context, Result, anyhow};
use directories::UserDirs;
use tracing::info;

use weatherterm_core::{Config, config};

use crate::cli::ReportArgs;

/// launchd property list rendered into the user's LaunchAgents directory.
const SERVICE_TEMPLATE: &str = include_str!("../templates/com.weatherterm.plist");

const SERVICE_FILE: &str = "com.weatherterm.plist";

/// Render the service template with the resolved settings and write it to
/// `~/Library/LaunchAgents`.
pub fn install(args: &ReportArgs, config: &Config) -> Result<()> {
    let binary = env::current_exe().context("unable to determine binary path")?;

    let country = args.country.clone().or_else(|| config.country.clone()).unwrap_or_default();
    let city = args.city.clone().or_else(|| config.city.clone()).unwrap_or_default();
    let key = args.key.clone().or_else(|| config.api_key.clone()).unwrap_or_default();
    let unit = args
        .unit
        .clone()
        .or_else(|| config.unit.clone())
        .unwrap_or_else(|| "metric".to_string());
    let sleep = args.sleep.or(config.sleep_secs).unwrap_or(300);
    let file = match args.file.clone().or_else(|| config.file.clone()) {
        Some(path) => path,
        None => config::default_report_path()?,
    };

    let rendered = render_template(
        SERVICE_TEMPLATE,
        &[
            ("BinaryPath", binary.display().to_string()),
            ("CountryCode", country),
            ("CityName", city),
            ("APIKey", key),
            ("Unit", unit),
            ("SleepTime", sleep.to_string()),
            ("File", file.display().to_string()),
        ],
    );

    let user_dirs = UserDirs::new().ok_or_else(|| anyhow!("unable to determine home directory"))?;
    let agents_dir = user_dirs.home_dir().join("Library/LaunchAgents");

    fs::create_dir_all(&agents_dir)
        .with_context(|| format!("unable to create {}", agents_dir.display()))?;

    let plist_path = agents_dir.join(SERVICE_FILE);
    fs::write(&plist_path, rendered)
        .with_context(|| format!("unable to write {}", plist_path.display()))?;

    info!("weatherterm service installed at {}", plist_path.display());

    Ok(())
}

/// Replace every `{{Key}}` placeholder with its value.
fn render_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut rendered = template.to_string();
    for (key, value) in vars {
        rendered = rendered.replace(&format!("{{{{{key}}}}}"), value);
    }

    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_renders_all_placeholders() {
        let rendered = render_template(
            SERVICE_TEMPLATE,
            &[
                ("BinaryPath", "/usr/local/bin/weatherterm".to_string()),
                ("CountryCode", "US".to_string()),
                ("CityName", "New York".to_string()),
                ("APIKey", "KEY".to_string()),
                ("Unit", "metric".to_string()),
                ("SleepTime", "300".to_string()),
                ("File", "/Users/me/.weatherterm".to_string()),
            ],
        );

        assert!(rendered.contains("<string>/usr/local/bin/weatherterm</string>"));
        assert!(rendered.contains("<string>New York</string>"));
        assert!(rendered.contains("<string>300</string>"));
        assert!(!rendered.contains("{{"), "unrendered placeholder left in:\n{rendered}");
    }

    #[test]
    fn render_template_only_touches_known_placeholders() {
        let rendered = render_template("a {{One}} b {{Two}}", &[("One", "1".to_string())]);

        assert_eq!(rendered, "a 1 b {{Two}}");
    }
}
