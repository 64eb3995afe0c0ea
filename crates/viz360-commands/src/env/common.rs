//! Shared helpers for environment commands.

use std::io::{BufRead, Write};

use viz360_core::environment::{ConfirmRemoval, EnvironmentManager, RemovalPlan};

/// Join positional words into the environment name (`add Sala 2` -> `Sala 2`).
pub fn join_name(words: &[String]) -> anyhow::Result<String> {
    let name = words.join(" ");
    if name.trim().is_empty() {
        anyhow::bail!("Environment name not provided");
    }
    Ok(name)
}

pub fn manager(public_dir: Option<&str>) -> EnvironmentManager {
    let manager = EnvironmentManager::from_config(public_dir);
    tracing::debug!(public_dir = %manager.layout().root().display(), "Using public dir");
    manager
}

/// `y`, `yes`, `s`, `sim` (any case, surrounding whitespace ignored).
pub fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "s" | "sim"
    )
}

/// Prompts on stderr and reads one line from a reader (stdin by default).
pub struct StdinConfirm<R> {
    reader: R,
}

impl StdinConfirm<std::io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self {
            reader: std::io::stdin().lock(),
        }
    }
}

impl<R: BufRead> StdinConfirm<R> {
    pub fn from_reader(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> ConfirmRemoval for StdinConfirm<R> {
    fn confirm(&mut self, plan: &RemovalPlan) -> std::io::Result<bool> {
        eprintln!();
        eprintln!(
            "⚠ About to remove environment '{}' (id: {})",
            plan.record.name, plan.record.id
        );
        eprintln!("   This will:");
        eprintln!("   - remove its entry from environments.json");
        eprintln!("   - KEEP the image and preset folders");
        eprintln!();
        eprintln!("   To delete the folders too, remove them manually:");
        eprintln!("   - {}", plan.img_dir.display());
        eprintln!("   - {}", plan.preset_dir.display());
        eprint!("\n   Continue? [y/N] ");
        std::io::stderr().flush()?;

        let mut answer = String::new();
        self.reader.read_line(&mut answer)?;
        Ok(is_affirmative(&answer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use viz360_core::environment::EnvironmentRecord;

    #[test]
    fn test_is_affirmative() {
        for yes in ["y", "Y", " yes\n", "s", "SIM"] {
            assert!(is_affirmative(yes), "{yes:?}");
        }
        for no in ["", "n", "no", "nao", "yess", "\n"] {
            assert!(!is_affirmative(no), "{no:?}");
        }
    }

    #[test]
    fn test_join_name() {
        let words = vec!["Sala".to_string(), "2".to_string()];
        assert_eq!(join_name(&words).unwrap(), "Sala 2");
        assert!(join_name(&[]).is_err());
    }

    #[test]
    fn test_stdin_confirm_reads_answer() {
        let plan = RemovalPlan {
            record: EnvironmentRecord::new("sala", "Sala"),
            img_dir: "/tmp/public/img/sala".into(),
            preset_dir: "/tmp/public/presets/sala".into(),
        };
        let mut yes = StdinConfirm::from_reader("s\n".as_bytes());
        assert!(yes.confirm(&plan).unwrap());
        let mut no = StdinConfirm::from_reader("n\n".as_bytes());
        assert!(!no.confirm(&plan).unwrap());
        let mut eof = StdinConfirm::from_reader("".as_bytes());
        assert!(!eof.confirm(&plan).unwrap());
    }
}
