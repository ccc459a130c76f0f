pub mod lexicon_ops;
