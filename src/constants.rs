// Front-end wiring constants: element ids, attribute names and timings.

// Background canvas mounted automatically at start-up
pub const BEAMS_CANVAS_ID: &str = "beams-canvas";
pub const CONFIG_ATTR_PREFIX: &str = "data-"; // e.g. data-intensity="medium"

// Frame statistics
pub const FPS_REPORT_INTERVAL_SEC: f32 = 5.0;

// Quiz view
pub const QUIZ_QUESTION_ID: &str = "quiz-question";
pub const QUIZ_PROGRESS_ID: &str = "quiz-progress";
pub const QUIZ_INPUT_ID: &str = "quiz-input";
pub const QUIZ_SUBMIT_ID: &str = "quiz-submit";
pub const QUIZ_FEEDBACK_ID: &str = "quiz-feedback";
pub const QUIZ_RESULT_ID: &str = "quiz-result";
pub const QUIZ_RESTART_ID: &str = "quiz-restart";
pub const QUIZ_FEEDBACK_DELAY_MS: i32 = 1500; // review time before the next question

pub const QUIZ_CORRECT_TEXT: &str = "✅ Bonne réponse !";
pub const QUIZ_INCORRECT_PREFIX: &str = "❌ Mauvaise réponse ! Réponse attendue : ";
pub const QUIZ_CORRECT_CLASS: &str = "correct";
pub const QUIZ_INCORRECT_CLASS: &str = "incorrect";
pub const HIDDEN_CLASS: &str = "hidden";
