//! Configuration types and static chat text.

use std::path::PathBuf;
use std::time::Duration;

/// Bot configuration.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Model name handed to the local model runner.
    pub model: String,
    /// Path of the guide document (read-only input).
    pub guide_path: PathBuf,
    /// Path of the progress document (read/write).
    pub progress_path: PathBuf,
    /// Deadline for a single oracle completion.
    pub oracle_timeout: Duration,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            model: "phi3:mini".to_string(),
            guide_path: PathBuf::from("guide.json"),
            progress_path: PathBuf::from("progress.json"),
            oracle_timeout: Duration::from_secs(60),
        }
    }
}

impl BotConfig {
    /// Build a config from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            model: std::env::var("MENTOR_MODEL").unwrap_or(defaults.model),
            guide_path: std::env::var("MENTOR_GUIDE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.guide_path),
            progress_path: std::env::var("MENTOR_PROGRESS_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.progress_path),
            oracle_timeout: std::env::var("MENTOR_ORACLE_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.oracle_timeout),
        }
    }
}

/// Static help text for the `aide` command.
pub const HELP_TEXT: &str = "\
🛠️ **Commandes disponibles :**
- `guide` → Voir tout le parcours
- `où suis-je ?` → Ton état actuel
- `terminé` → Passer à l'étape suivante
- `aide` → Ce message

💬 Pose aussi des questions techniques :
> \"Comment installer Git ?\"
> \"Crée un projet React\"

🌐 **Ressources utiles :**
- [GitHub](https://github.com)
- [VS Code](https://code.visualstudio.com)
- [Pi Dev Portal](https://minepi.com/dev)";

/// Congratulatory message once there is no next step.
pub const GUIDE_COMPLETE_TEXT: &str = "🎉 **Félicitations ! Tu as terminé toutes les étapes.**\n\nTu es prêt à créer ta première app Pi Network.";
