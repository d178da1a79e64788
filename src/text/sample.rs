// src/text/sample.rs

/// Opening of Hamlet's soliloquy. Text in other scripts needs a font that
/// covers it, passed on the command line.
pub const SAMPLE_TEXT: &str = "To be, or not to be, that is the question: whether 'tis nobler in the mind to suffer the slings and arrows of outrageous fortune, or to take arms against a sea of troubles and by opposing end them?\n To die: to sleep; no more; and, by a sleep to say we end the heart-ache and the thousand natural shocks that flesh is heir to, 'tis a consummation devoutly to be wish'd. To die, to sleep;\n To sleep: perchance to dream: ay, there's the rub; for in that sleep of death what dreams may come when we have shuffled off this mortal coil, must give us pause.";
