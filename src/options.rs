//! Table presentation options.
//!
//! The rules themselves are fixed; these options only change what the table
//! reveals and when the player's turn ends.

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use border7::GameOptions;
///
/// let options = GameOptions::default()
///     .with_hide_hole_card(false)
///     .with_end_turn_on_bust(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameOptions {
    /// Whether the dealer's second card and its score stay hidden until the
    /// player's turn ends.
    pub hide_hole_card: bool,
    /// Whether a hit that busts the player ends the turn immediately. The
    /// dealer does not draw in that case.
    pub end_turn_on_bust: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hide_hole_card: true,
            end_turn_on_bust: true,
        }
    }
}

impl GameOptions {
    /// Sets whether the dealer's hole card is hidden during the player's turn.
    ///
    /// # Example
    ///
    /// ```
    /// use border7::GameOptions;
    ///
    /// let options = GameOptions::default().with_hide_hole_card(false);
    /// assert!(!options.hide_hole_card);
    /// ```
    #[must_use]
    pub const fn with_hide_hole_card(mut self, hide: bool) -> Self {
        self.hide_hole_card = hide;
        self
    }

    /// Sets whether a busting hit ends the player's turn.
    ///
    /// # Example
    ///
    /// ```
    /// use border7::GameOptions;
    ///
    /// let options = GameOptions::default().with_end_turn_on_bust(false);
    /// assert!(!options.end_turn_on_bust);
    /// ```
    #[must_use]
    pub const fn with_end_turn_on_bust(mut self, end: bool) -> Self {
        self.end_turn_on_bust = end;
        self
    }
}
