pub mod bar_chart;
pub mod word_crowd;

pub use bar_chart::render_bar_chart;
pub use word_crowd::render_word_crowd;
