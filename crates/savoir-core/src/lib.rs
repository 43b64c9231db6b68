pub mod beam;
pub mod color;
pub mod config;
pub mod constants;
pub mod field;
pub mod normalize;
pub mod questions;
pub mod quiz;
pub mod surface;

pub use beam::Beam;
pub use color::{ColorStop, Hsla, LinearGradient};
pub use config::{ConfigError, FieldConfig, Intensity, RecyclePolicy};
pub use field::BeamField;
pub use normalize::{answers_match, normalize};
pub use questions::{Question, QUESTIONS};
pub use quiz::{Feedback, Phase, QuizError, QuizSession};
pub use surface::{DrawSurface, Rect};
