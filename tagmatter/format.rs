//! Replacement text for an accepted suggestion.

use crate::{
  config::EngineConfig,
  frontmatter::FieldForm,
};

/// The literal text to write over the partial token, and whether it leaves
/// the cursor on a fresh, empty entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
  pub text: String,
  pub advance_to_new_entry: bool,
}

/// Shape the accepted tag for its field form.
///
/// With `auto_add_new_entry` the replacement primes the next entry: a
/// trailing `, ` inline, or a newline plus an indented `- ` in list form.
/// Without it, the bare tag is written.
pub fn format(tag: &str, form: FieldForm, config: &EngineConfig) -> Replacement {
  if !config.auto_add_new_entry {
    return Replacement {
      text: tag.to_owned(),
      advance_to_new_entry: false,
    };
  }

  let text = match form {
    FieldForm::Inline => format!("{tag}, "),
    FieldForm::List => format!("{tag}\n{}- ", indent(config)),
  };

  Replacement {
    text,
    advance_to_new_entry: true,
  }
}

fn indent(config: &EngineConfig) -> String {
  if config.use_spaces_for_indent {
    // A non-positive width still has to indent the item line.
    " ".repeat(config.indent_width.max(1))
  } else {
    "\t".to_owned()
  }
}
