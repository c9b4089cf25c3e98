//! `.env` loading (KEY=VALUE lines) into the process environment.

use std::path::PathBuf;

/// Parse `.env` content. Blank lines and `#` comments are skipped;
/// surrounding quotes on values are stripped.
pub fn parse(contents: &str) -> Vec<(String, String)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let line = line.strip_prefix("export ").unwrap_or(line);
            let (key, value) = line.split_once('=')?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            let value = value.trim().trim_matches('"').trim_matches('\'');
            Some((key.to_string(), value.to_string()))
        })
        .collect()
}

/// Load the first `.env` found (working directory, then the minichat
/// config directory). Variables already set in the environment win.
///
/// Returns the file that was loaded, if any.
pub fn load() -> Option<PathBuf> {
    let mut candidates = vec![PathBuf::from(".env")];
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("minichat").join(".env"));
    }

    for path in candidates {
        if let Ok(contents) = std::fs::read_to_string(&path) {
            for (key, value) in parse(&contents) {
                if std::env::var_os(&key).is_none() {
                    std::env::set_var(key, value);
                }
            }
            return Some(path);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keys_values_and_skips_comments() {
        let vars = parse(
            "# secrets\n\
             GOOGLE_API_KEY=\"AIza123\"\n\
             \n\
             export LOG='debug'\n\
             not a pair\n\
             =orphan\n",
        );
        assert_eq!(
            vars,
            vec![
                ("GOOGLE_API_KEY".to_string(), "AIza123".to_string()),
                ("LOG".to_string(), "debug".to_string()),
            ]
        );
    }

    #[test]
    fn value_may_contain_equals() {
        let vars = parse("TOKEN=a=b=c");
        assert_eq!(vars, vec![("TOKEN".to_string(), "a=b=c".to_string())]);
    }
}
