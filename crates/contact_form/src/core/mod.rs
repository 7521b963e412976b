//! Pure form core: state, validation and the reducer.
//!
//! Nothing in here touches the terminal. The modules are kept free of UI /
//! rendering concerns so the validation rules and submit semantics can be
//! unit tested in isolation:
//!   - `state.rs`    : field values, focus ring, submission snapshot
//!   - `validate.rs` : the rule set mapping values to per-field errors
//!   - `reducer.rs`  : `reduce(&mut FormModel, Action) -> Vec<Effect>`

pub mod reducer;
pub mod state;
pub mod validate;
