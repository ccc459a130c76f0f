pub mod lexicon;
pub mod translate;
pub mod unicode;

pub use lexicon::{Direction, Lexicon, LexiconError};
pub use translate::translate_sentence;
