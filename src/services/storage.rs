use crate::domain::models::Config;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

fn config_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".config/modelfix"))
}

pub fn load_config() -> anyhow::Result<Config> {
    let path = config_dir()?.join("config.toml");
    if !path.exists() {
        return Ok(Config::default());
    }
    let raw = std::fs::read_to_string(&path)?;
    toml::from_str(&raw).map_err(|e| anyhow::anyhow!("invalid config {}: {}", path.display(), e))
}

/// Append one JSON event to `audit.jsonl` next to the config. Failures are
/// logged and otherwise ignored.
pub fn audit(action: &str, data: serde_json::Value) {
    let result = config_dir().and_then(|dir| {
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let event = serde_json::json!({"ts": ts, "action": action, "data": data});
        append_line(&dir.join("audit.jsonl"), &event.to_string())
    });
    if let Err(e) = result {
        tracing::warn!(action, error = %e, "audit log not written");
    }
}

fn append_line(path: &Path, line: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut f = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(f, "{}", line)?;
    Ok(())
}
