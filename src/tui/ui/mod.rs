mod layout;
mod sprites;
mod table;

use crate::tui::app::AppState;
use ratatui::prelude::Frame;

pub fn draw(f: &mut Frame, app: &AppState) {
    table::draw_table(f, app);
}
