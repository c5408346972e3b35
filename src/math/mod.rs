pub mod hundredths;

pub use hundredths::ceil100;
