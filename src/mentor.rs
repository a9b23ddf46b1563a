//! The mentor — per-message handling and text rendering.
//!
//! State is explicit per call: both documents are loaded at the start of
//! handling and progress is written back at the end of a mutating branch.
//! There is no process-wide cached copy, so edits to the guide document on
//! disk are visible on the very next message.

use std::sync::Arc;

use crate::config::{BotConfig, GUIDE_COMPLETE_TEXT, HELP_TEXT};
use crate::guide::Guide;
use crate::oracle::Oracle;
use crate::progress::{self, Advance, Progress};
use crate::router::{Intent, classify};
use crate::store;

/// Command-driven tutoring bot over a guide + progress document pair.
pub struct Mentor {
    config: BotConfig,
    oracle: Arc<dyn Oracle>,
}

impl Mentor {
    pub fn new(config: BotConfig, oracle: Arc<dyn Oracle>) -> Self {
        Self { config, oracle }
    }

    /// Handle one inbound message and produce the reply text.
    ///
    /// Every branch returns text; persistence and oracle failures are
    /// logged or rendered, never propagated.
    pub async fn handle(&self, text: &str) -> String {
        let text = text.trim();
        match classify(text) {
            Intent::ShowGuide => self.render_guide().await,
            Intent::ShowStatus => self.render_status().await,
            Intent::Advance => self.advance().await,
            Intent::Help => HELP_TEXT.to_string(),
            Intent::AskOracle => match self.oracle.complete(text).await {
                Ok(answer) => answer,
                Err(e) => {
                    tracing::warn!("Oracle failed: {e}");
                    format!("❌ Échec du modèle : {e}")
                }
            },
        }
    }

    /// Welcome message emitted once when the chat opens.
    pub async fn welcome(&self) -> String {
        let guide = self.load_guide().await;
        let progress = self.load_progress().await;

        let title = if guide.title.is_empty() {
            "Guide Inconnu".to_string()
        } else {
            guide.title.clone()
        };

        format!(
            "🚀 **Mentor Bot v{version}**\n\n\
             Bonjour Pioneer !\n\
             Je suis ton assistant IA **100 % local**, sans compte, sans cloud.\n\n\
             📚 Tu suis : **{title}**\n\
             🎯 Tu es à l'étape : `{step}`\n\n\
             👉 Tape :\n\
             - `guide` → voir tout le parcours\n\
             - `où suis-je ?` → ton état actuel\n\
             - `terminé` → passer à l'étape suivante\n\
             - `aide` → toutes les commandes",
            version = env!("CARGO_PKG_VERSION"),
            step = progress.current_step,
        )
    }

    async fn load_guide(&self) -> Guide {
        store::load(&self.config.guide_path, Guide::default()).await
    }

    async fn load_progress(&self) -> Progress {
        store::load(&self.config.progress_path, Progress::default()).await
    }

    async fn save_progress(&self, progress: &mut Progress) {
        progress.touch();
        store::save(&self.config.progress_path, progress).await;
    }

    /// Full guide listing with per-step status glyphs.
    async fn render_guide(&self) -> String {
        let guide = self.load_guide().await;
        let progress = self.load_progress().await;

        let mut out = String::from("📋 **Guide Interactif - Mentor Bot**\n\n");
        for section in &guide.sections {
            out.push_str(&format!("🔹 **{}**\n", section.title));
            for step in &section.steps {
                let glyph = progress.step_status(&step.id).glyph();
                out.push_str(&format!("   {} {}\n", glyph, step.desc));
            }
            out.push('\n');
        }
        out
    }

    /// Current position and counts, recomputed against the fresh guide.
    async fn render_status(&self) -> String {
        let guide = self.load_guide().await;
        let progress = self.load_progress().await;
        let report = progress::status(&guide, &progress);

        format!(
            "📌 **📍 Tu es ici :**\n\
             > Section : **{}**\n\
             > Étape : `{}`\n\
             > Progression : {}/{}\n\n\
             💡 Continue comme ça !",
            report.section, report.step, report.completed, report.total,
        )
    }

    /// Mark the current step done, move the cursor, persist, and announce
    /// either the next step or guide completion.
    async fn advance(&self) -> String {
        let guide = self.load_guide().await;
        let mut progress = self.load_progress().await;
        let done = progress.current_step.clone();

        let outcome = progress::advance(&guide, &mut progress);
        self.save_progress(&mut progress).await;

        let action = match outcome {
            Advance::Next(step) => {
                let mut action = format!("➡️ Prochaine étape : {}", step.desc);
                if let Some(command) = step.command {
                    action.push_str(&format!("\n\n🔧 Commande :\n```bash\n{command}\n```"));
                }
                action
            }
            Advance::GuideComplete => GUIDE_COMPLETE_TEXT.to_string(),
        };

        format!("✅ Étape '{done}' marquée comme terminée.\n\n{action}")
    }
}
