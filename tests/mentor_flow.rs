//! End-to-end message handling: router → state machine → persistence →
//! rendered text, with the oracle stubbed or pointed at a throwaway
//! subprocess.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use mentor_bot::config::BotConfig;
use mentor_bot::error::OracleError;
use mentor_bot::mentor::Mentor;
use mentor_bot::oracle::{OllamaOracle, Oracle};
use mentor_bot::progress::Progress;

struct StubOracle {
    reply: String,
}

#[async_trait]
impl Oracle for StubOracle {
    async fn complete(&self, _prompt: &str) -> Result<String, OracleError> {
        Ok(self.reply.clone())
    }
}

const ABC_GUIDE: &str = r#"{
  "title": "Guide ABC",
  "sections": [
    {
      "title": "Section Unique",
      "steps": [
        { "id": "a", "desc": "Étape A" },
        { "id": "b", "desc": "Étape B", "command": "echo B" },
        { "id": "c", "desc": "Étape C" }
      ]
    }
  ]
}"#;

const INITIAL_PROGRESS: &str = r#"{
  "currentSection": "Section Unique",
  "currentStep": "a",
  "completed": [],
  "lastUpdated": "2024-01-01T00:00:00Z"
}"#;

fn setup(dir: &Path, oracle: Arc<dyn Oracle>) -> Mentor {
    std::fs::write(dir.join("guide.json"), ABC_GUIDE).unwrap();
    std::fs::write(dir.join("progress.json"), INITIAL_PROGRESS).unwrap();

    let config = BotConfig {
        guide_path: dir.join("guide.json"),
        progress_path: dir.join("progress.json"),
        ..BotConfig::default()
    };
    Mentor::new(config, oracle)
}

fn stub() -> Arc<dyn Oracle> {
    Arc::new(StubOracle {
        reply: "réponse du modèle".to_string(),
    })
}

fn read_progress(dir: &Path) -> Progress {
    let raw = std::fs::read_to_string(dir.join("progress.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[tokio::test]
async fn advancing_three_times_walks_and_completes_the_guide() {
    let dir = tempfile::tempdir().unwrap();
    let mentor = setup(dir.path(), stub());

    // a → b
    let reply = mentor.handle("terminé").await;
    assert!(reply.contains("'a'"), "should confirm step a: {reply}");
    assert!(reply.contains("Étape B"), "should announce step B: {reply}");
    assert!(reply.contains("```bash\necho B\n```"), "step B carries a command: {reply}");
    let p = read_progress(dir.path());
    assert_eq!(p.current_step, "b");
    assert_eq!(p.completed, vec!["a"]);

    // b → c
    mentor.handle("terminé").await;
    let p = read_progress(dir.path());
    assert_eq!(p.current_step, "c");
    assert_eq!(p.completed, vec!["a", "b"]);

    // c is the last step: terminal outcome, cursor stays.
    let reply = mentor.handle("terminé").await;
    assert!(reply.contains("Félicitations"), "terminal message expected: {reply}");
    let p = read_progress(dir.path());
    assert_eq!(p.current_step, "c");
    assert_eq!(p.completed, vec!["a", "b", "c"]);

    // Advancing past the end never duplicates ids.
    mentor.handle("terminé").await;
    let p = read_progress(dir.path());
    assert_eq!(p.completed, vec!["a", "b", "c"]);
}

#[tokio::test]
async fn status_query_never_mutates_progress() {
    let dir = tempfile::tempdir().unwrap();
    let mentor = setup(dir.path(), stub());
    let before = std::fs::read_to_string(dir.path().join("progress.json")).unwrap();

    let reply = mentor.handle("où suis-je ?").await;
    assert!(reply.contains("`a`"), "status should show current step: {reply}");
    assert!(reply.contains("0/3"), "status should show counts: {reply}");

    let after = std::fs::read_to_string(dir.path().join("progress.json")).unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn guide_listing_classifies_every_step() {
    let dir = tempfile::tempdir().unwrap();
    let mentor = setup(dir.path(), stub());
    mentor.handle("terminé").await; // a done, b current

    let listing = mentor.handle("guide").await;
    assert!(listing.contains("Section Unique"));
    assert!(listing.contains("✅ Étape A"));
    assert!(listing.contains("🟡 Étape B"));
    assert!(listing.contains("⚪ Étape C"));
}

#[tokio::test]
async fn missing_progress_document_starts_from_the_default() {
    let dir = tempfile::tempdir().unwrap();
    let mentor = setup(dir.path(), stub());
    std::fs::remove_file(dir.path().join("progress.json")).unwrap();

    let reply = mentor.handle("où suis-je ?").await;
    assert!(reply.contains("`create-account`"), "default step expected: {reply}");
}

#[tokio::test]
async fn corrupt_progress_document_is_treated_as_missing() {
    let dir = tempfile::tempdir().unwrap();
    let mentor = setup(dir.path(), stub());
    std::fs::write(dir.path().join("progress.json"), "{ nope").unwrap();

    let reply = mentor.handle("où suis-je ?").await;
    assert!(reply.contains("`create-account`"), "default step expected: {reply}");
}

#[tokio::test]
async fn free_form_text_goes_to_the_oracle_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let mentor = setup(dir.path(), stub());

    let reply = mentor.handle("Comment installer Git ?").await;
    assert_eq!(reply, "réponse du modèle");
}

#[tokio::test]
async fn oracle_timeout_becomes_a_chat_message() {
    let dir = tempfile::tempdir().unwrap();
    let slow = Arc::new(OllamaOracle::from_argv(
        vec!["sh".to_string(), "-c".to_string(), "sleep 10".to_string()],
        Duration::from_millis(100),
    ));
    let mentor = setup(dir.path(), slow);

    let reply = mentor.handle("une question libre").await;
    assert!(reply.starts_with("❌"), "failure indicator expected: {reply}");
}

#[tokio::test]
async fn oracle_process_failure_becomes_a_chat_message() {
    let dir = tempfile::tempdir().unwrap();
    let broken = Arc::new(OllamaOracle::from_argv(
        vec![
            "sh".to_string(),
            "-c".to_string(),
            "echo boom >&2; exit 1".to_string(),
        ],
        Duration::from_secs(5),
    ));
    let mentor = setup(dir.path(), broken);

    let reply = mentor.handle("une question libre").await;
    assert!(reply.starts_with("❌"), "failure indicator expected: {reply}");
    assert!(reply.contains("boom"), "stderr should be embedded: {reply}");
}

#[tokio::test]
async fn help_returns_the_command_reference() {
    let dir = tempfile::tempdir().unwrap();
    let mentor = setup(dir.path(), stub());

    let reply = mentor.handle("aide").await;
    assert!(reply.contains("Commandes disponibles"));
    assert!(reply.contains("`terminé`"));
}

#[tokio::test]
async fn welcome_names_the_guide_and_current_step() {
    let dir = tempfile::tempdir().unwrap();
    let mentor = setup(dir.path(), stub());

    let welcome = mentor.welcome().await;
    assert!(welcome.contains("Guide ABC"));
    assert!(welcome.contains("`a`"));
}

#[tokio::test]
async fn hot_edited_guide_changes_the_reported_total() {
    let dir = tempfile::tempdir().unwrap();
    let mentor = setup(dir.path(), stub());

    assert!(mentor.handle("où suis-je ?").await.contains("0/3"));

    // Drop a step from the guide between two messages.
    let trimmed = r#"{
      "title": "Guide ABC",
      "sections": [
        { "title": "Section Unique", "steps": [
          { "id": "a", "desc": "Étape A" },
          { "id": "b", "desc": "Étape B" }
        ]}
      ]
    }"#;
    std::fs::write(dir.path().join("guide.json"), trimmed).unwrap();

    assert!(mentor.handle("où suis-je ?").await.contains("0/2"));
}

#[tokio::test]
async fn stale_cursor_after_guide_edit_is_reported_complete() {
    let dir = tempfile::tempdir().unwrap();
    let mentor = setup(dir.path(), stub());

    let stale = r#"{
      "currentSection": "Section Unique",
      "currentStep": "no-longer-in-guide",
      "completed": [],
      "lastUpdated": "2024-01-01T00:00:00Z"
    }"#;
    std::fs::write(dir.path().join("progress.json"), stale).unwrap();

    let reply = mentor.handle("terminé").await;
    assert!(reply.contains("Félicitations"), "complete fallback expected: {reply}");
    let p = read_progress(dir.path());
    assert_eq!(p.completed, vec!["no-longer-in-guide"]);
}
