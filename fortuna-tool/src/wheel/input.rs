use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use super::app::{AppMode, WheelApp};

pub fn handle_event(app: &mut WheelApp, event: Event) {
    if let Event::Key(key) = event {
        handle_key(app, key);
    }
}

fn handle_key(app: &mut WheelApp, key: KeyEvent) {
    match app.mode {
        AppMode::Manual => handle_manual_key(app, key),
        AppMode::Search => handle_search_key(app, key),
        AppMode::Spinning => handle_spinning_key(app, key),
        AppMode::Winner => handle_winner_key(app, key),
    }
}

fn handle_manual_key(app: &mut WheelApp, key: KeyEvent) {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => {
            app.should_quit = true;
        }
        (KeyCode::Tab, _) => {
            app.switch_tab();
        }
        (KeyCode::F(2), _) => {
            app.start_spin();
        }
        (KeyCode::Enter, KeyModifiers::NONE) => {
            app.add_entry();
        }
        (KeyCode::Up, _) => {
            app.option_up();
        }
        (KeyCode::Down, _) => {
            app.option_down();
        }
        (KeyCode::Delete, _) => {
            app.remove_selected_option();
        }
        (KeyCode::Char('x'), KeyModifiers::CONTROL) => {
            app.clear_options();
        }
        (KeyCode::Backspace, _) => {
            app.input_backspace();
        }
        (KeyCode::Left, _) => {
            app.input_left();
        }
        (KeyCode::Right, _) => {
            app.input_right();
        }
        (KeyCode::Home, _) => {
            app.input_home();
        }
        (KeyCode::End, _) => {
            app.input_end();
        }
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            app.input_char(c);
        }
        _ => {}
    }
}

fn handle_search_key(app: &mut WheelApp, key: KeyEvent) {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => {
            app.should_quit = true;
        }
        (KeyCode::Tab, _) => {
            app.switch_tab();
        }
        (KeyCode::F(2), _) => {
            app.start_spin();
        }
        (KeyCode::F(4), _) => {
            app.add_selected_result();
        }
        (KeyCode::F(5), _) => {
            app.relocate();
        }
        (KeyCode::Enter, KeyModifiers::NONE) => {
            app.submit_search();
        }
        (KeyCode::Up, _) => {
            app.result_up();
        }
        (KeyCode::Down, _) => {
            app.result_down();
        }
        (KeyCode::Delete, _) => {
            app.input_delete();
        }
        (KeyCode::Backspace, _) => {
            app.input_backspace();
        }
        (KeyCode::Left, _) => {
            app.input_left();
        }
        (KeyCode::Right, _) => {
            app.input_right();
        }
        (KeyCode::Home, _) => {
            app.input_home();
        }
        (KeyCode::End, _) => {
            app.input_end();
        }
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            app.input_char(c);
        }
        _ => {}
    }
}

fn handle_spinning_key(app: &mut WheelApp, key: KeyEvent) {
    // The settlement timer cannot be cancelled; quitting just discards it.
    if key.code == KeyCode::Esc {
        app.should_quit = true;
    }
}

fn handle_winner_key(app: &mut WheelApp, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.dismiss_winner(),
        KeyCode::Enter => app.respin(),
        _ => {}
    }
}
