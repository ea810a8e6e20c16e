//! Select field: value/option resolution and field state for dropdown
//! selects.

pub mod creatable;
mod events;
pub mod filter;
pub mod item;
pub mod props;
pub mod render;
pub mod resolve;
mod state;
pub mod value;

pub use item::{OptionLeaf, RawOption, SelectOption, normalize};
pub use props::{DropdownBehavior, FocusEvent, SelectProps};
pub use render::{DropdownKind, FieldView};
pub use resolve::Selection;
pub use state::{ControlMode, SelectField};
