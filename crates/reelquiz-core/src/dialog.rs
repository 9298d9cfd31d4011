//! Dialog request emitted toward the presentation layer.

/// What kind of condition a dialog reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    /// End-of-round summary.
    RoundResult,
    /// Feed fetch or parse failure.
    NetworkError,
    /// Feed answered but carried no usable movies.
    CatalogError,
    /// Poster fetch failure for a single question.
    ImageError,
}

/// A structured description of a message to show the player, with
/// exactly one acknowledgement action.
///
/// The engine pairs every dialog with a pending recovery transition;
/// the presentation layer reports the button press back through
/// `RoundEngine::acknowledge_dialog`, which fires that transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogRequest {
    /// Condition class, for presentation styling and tests.
    pub kind: DialogKind,
    /// Dialog title.
    pub title: String,
    /// Dialog body.
    pub message: String,
    /// Label of the single acknowledgement button.
    pub action_label: String,
}
