//! End-to-end suggestion cycles against a rope document: keystroke-by-
//! keystroke triggering, acceptance, and the one-shot suppression that
//! follows an auto-added entry.

use ropey::Rope;
use tagmatter::{
  config::EngineConfig,
  engine::{
    Edit,
    SuggestionEngine,
    TriggerContext,
  },
  frontmatter::FieldForm,
};
use tagmatter_core::position::Position;

fn vault_tags() -> Vec<String> {
  [
    "#project",
    "#Project/Alpha",
    "#beta",
    "#tag2",
    "#tag10",
    "#writing",
  ]
  .iter()
  .map(|s| s.to_string())
  .collect()
}

/// Simulate typing `text` at `cursor`, returning the trigger context of the
/// final keystroke (if any) and the cursor after typing.
fn type_text(
  doc: &mut Rope,
  engine: &mut SuggestionEngine,
  cursor: Position,
  text: &str,
  tags: &[String],
) -> (Option<TriggerContext>, Position) {
  let mut cursor = cursor;
  let mut last = None;
  for ch in text.chars() {
    let at = doc.line_to_char(cursor.row) + cursor.col;
    doc.insert(at, &ch.to_string());
    cursor = if ch == '\n' {
      Position::new(cursor.row + 1, 0)
    } else {
      cursor.with_col(cursor.col + 1)
    };
    last = engine.on_trigger(doc.slice(..), cursor, tags);
  }
  (last, cursor)
}

fn apply(doc: &mut Rope, edit: &Edit) -> Position {
  edit.apply(doc);
  // Host contract: cursor ends up at the end of the inserted text.
  let mut row = edit.start.row;
  let mut col = edit.start.col;
  for ch in edit.text.chars() {
    if ch == '\n' {
      row += 1;
      col = 0;
    } else {
      col += 1;
    }
  }
  Position::new(row, col)
}

#[test]
fn test_inline_cycle() {
  let mut doc = Rope::from("---\ntags: \n---\n");
  let mut engine = SuggestionEngine::new();
  let tags = vault_tags();
  let config = EngineConfig::default();

  let (ctx, _) = type_text(&mut doc, &mut engine, Position::new(1, 6), "pro", &tags);
  let ctx = ctx.expect("typing a partial tag on the tags line must trigger");
  assert_eq!(ctx.form, FieldForm::Inline);
  assert_eq!(ctx.query, "pro");

  let suggestions = engine.suggestions(&ctx.query);
  assert_eq!(suggestions, vec!["project"]);
  assert_eq!(engine.render_hint(suggestions[0]), "#project");

  let edit = engine.accept_suggestion(&ctx, "project", &config);
  apply(&mut doc, &edit);
  assert_eq!(doc.to_string(), "---\ntags: project, \n---\n");
}

#[test]
fn test_list_cycle_with_suppression() {
  let mut doc = Rope::from("---\ntags:\n  - \n---\n");
  let mut engine = SuggestionEngine::new();
  let tags = vault_tags();
  let config = EngineConfig {
    indent_width: 2,
    ..EngineConfig::default()
  };

  let (ctx, _) = type_text(&mut doc, &mut engine, Position::new(2, 4), "Al", &tags);
  let ctx = ctx.expect("list item typing must trigger");
  assert_eq!(ctx.form, FieldForm::List);
  assert_eq!(engine.suggestions(&ctx.query), vec!["Alpha"]);

  let edit = engine.accept_suggestion(&ctx, "Alpha", &config);
  let cursor = apply(&mut doc, &edit);
  assert_eq!(doc.to_string(), "---\ntags:\n  - Alpha\n  - \n---\n");
  assert_eq!(cursor, Position::new(3, 4));

  // The freshly inserted empty entry must not pop the list back up...
  assert_eq!(engine.on_trigger(doc.slice(..), cursor, &tags), None);

  // ...but the next actual keystroke resumes as usual.
  let (ctx, _) = type_text(&mut doc, &mut engine, cursor, "w", &tags);
  let ctx = ctx.expect("suppression must only last one activation");
  assert_eq!(engine.suggestions(&ctx.query), vec!["writing"]);
}

#[test]
fn test_suggestions_keep_natural_index_order() {
  let mut doc = Rope::from("---\ntags: \n---\n");
  let mut engine = SuggestionEngine::new();
  let tags = vault_tags();

  let (ctx, _) = type_text(&mut doc, &mut engine, Position::new(1, 6), "tag", &tags);
  let ctx = ctx.unwrap();
  // tag2 before tag10: numeric-aware ordering from the index.
  assert_eq!(engine.suggestions(&ctx.query), vec!["tag2", "tag10"]);
}

#[test]
fn test_hierarchical_tags_collapse_to_leaf() {
  let mut doc = Rope::from("---\ntags: \n---\n");
  let mut engine = SuggestionEngine::new();
  let tags = vault_tags();

  let (ctx, _) = type_text(&mut doc, &mut engine, Position::new(1, 6), "Alp", &tags);
  let ctx = ctx.unwrap();
  // #Project/Alpha is offered by its leaf only.
  assert_eq!(engine.suggestions(&ctx.query), vec!["Alpha"]);
}

#[test]
fn test_body_text_never_triggers() {
  let mut doc = Rope::from("---\ntags: x\n---\nnotes: \n");
  let mut engine = SuggestionEngine::new();
  let tags = vault_tags();

  let (ctx, _) = type_text(&mut doc, &mut engine, Position::new(3, 7), "pro", &tags);
  assert_eq!(ctx, None);
}

#[test]
fn test_config_loaded_from_toml_drives_formatting() {
  let config = EngineConfig::from_toml(
    "auto-add-new-entry = true\nuse-spaces-for-indent = false\n",
  )
  .unwrap();

  let mut doc = Rope::from("---\ntags:\n  - be\n---\n");
  let mut engine = SuggestionEngine::new();
  let tags = vault_tags();

  let ctx = engine
    .on_trigger(doc.slice(..), Position::new(2, 6), &tags)
    .unwrap();
  let edit = engine.accept_suggestion(&ctx, "beta", &config);
  edit.apply(&mut doc);
  assert_eq!(doc.to_string(), "---\ntags:\n  - beta\n\t- \n---\n");
}
