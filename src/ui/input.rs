//! Keyboard input handling for the TUI.
//!
//! This module handles all keyboard events and translates them into
//! application state changes.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{
    App, AppState, Tab, BOOKING_FIELD_COUNT, CONTACT_FIELD_COUNT, PAGE_SCROLL_SIZE,
};
use crate::catalog::{self, GALLERY_PAGE_SIZE};

/// Handle keyboard input. Returns true if the app should quit.
pub fn handle_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    // Handle help overlay
    if matches!(app.state, AppState::ShowingHelp) {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
        ) {
            app.state = AppState::Normal;
        }
        return Ok(false);
    }

    // Handle quit confirmation
    if matches!(app.state, AppState::ConfirmingQuit) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.state = AppState::Quitting;
                return Ok(true);
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.state = AppState::Normal;
            }
            _ => {}
        }
        return Ok(false);
    }

    // Handle search mode
    if matches!(app.state, AppState::Searching) {
        return handle_search_input(app, key);
    }

    // Handle form overlays
    if matches!(app.state, AppState::BookingForm) {
        return handle_booking_input(app, key);
    }
    if matches!(app.state, AppState::ContactForm) {
        return handle_contact_input(app, key);
    }

    // Global keys
    match key.code {
        KeyCode::Char('q') => {
            app.state = AppState::ConfirmingQuit;
            return Ok(false);
        }
        KeyCode::Char('?') => {
            app.state = AppState::ShowingHelp;
            return Ok(false);
        }
        KeyCode::Char('u') => {
            app.refresh_all_background();
            return Ok(false);
        }
        KeyCode::Char('m') => {
            app.open_contact_form();
            return Ok(false);
        }
        KeyCode::Char('1') => app.current_tab = Tab::Packages,
        KeyCode::Char('2') => app.current_tab = Tab::Gallery,
        KeyCode::Char('3') => app.current_tab = Tab::Testimonials,
        KeyCode::Char('4') => app.current_tab = Tab::Cart,
        KeyCode::Left => app.current_tab = app.current_tab.prev(),
        KeyCode::Right => app.current_tab = app.current_tab.next(),
        _ => return handle_tab_input(app, key),
    }

    Ok(false)
}

fn handle_tab_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    match app.current_tab {
        Tab::Packages => handle_packages_input(app, key),
        Tab::Gallery => handle_gallery_input(app, key),
        Tab::Testimonials => handle_testimonials_input(app, key),
        Tab::Cart => handle_cart_input(app, key),
    }
    Ok(false)
}

fn handle_packages_input(app: &mut App, key: KeyEvent) {
    let len = app.filtered_packages().len();
    match key.code {
        KeyCode::Up => {
            app.package_selection = app.package_selection.saturating_sub(1);
        }
        KeyCode::Down => {
            if len > 0 {
                app.package_selection = (app.package_selection + 1).min(len - 1);
            }
        }
        KeyCode::PageUp => {
            app.package_selection = app.package_selection.saturating_sub(PAGE_SCROLL_SIZE);
        }
        KeyCode::PageDown => {
            if len > 0 {
                app.package_selection = (app.package_selection + PAGE_SCROLL_SIZE).min(len - 1);
            }
        }
        KeyCode::Char('/') => {
            app.state = AppState::Searching;
        }
        KeyCode::Char('s') => app.cycle_sort(),
        KeyCode::Char('d') => app.cycle_destination_filter(),
        KeyCode::Char('t') => app.cycle_tour_type_filter(),
        KeyCode::Char('a') => app.cycle_availability_filter(),
        KeyCode::Char('x') => app.reset_package_filters(),
        KeyCode::Char('v') => app.view_mode = app.view_mode.toggle(),
        KeyCode::Char('i') => app.open_inquiry_for_selection(),
        KeyCode::Enter | KeyCode::Char('c') => app.add_selected_to_cart(),
        _ => {}
    }
}

fn handle_gallery_input(app: &mut App, key: KeyEvent) {
    let page_len = catalog::page_slice(
        &app.filtered_gallery(),
        app.gallery_page,
        GALLERY_PAGE_SIZE,
    )
    .len();
    match key.code {
        KeyCode::Up => {
            app.gallery_selection = app.gallery_selection.saturating_sub(1);
        }
        KeyCode::Down => {
            if page_len > 0 {
                app.gallery_selection = (app.gallery_selection + 1).min(page_len - 1);
            }
        }
        KeyCode::Char('n') => app.next_gallery_page(),
        KeyCode::Char('p') => app.prev_gallery_page(),
        KeyCode::Char('y') => app.cycle_gallery_year_filter(),
        KeyCode::Char('d') => app.cycle_gallery_destination_filter(),
        KeyCode::Char('t') => app.cycle_gallery_tour_type_filter(),
        KeyCode::Char('i') => app.open_inquiry_for_selection(),
        _ => {}
    }
}

fn handle_testimonials_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('n') | KeyCode::Down => app.next_testimonial(),
        KeyCode::Char('p') | KeyCode::Up => app.prev_testimonial(),
        _ => {}
    }
}

fn handle_cart_input(app: &mut App, key: KeyEvent) {
    let len = app.cart.lines().len();
    match key.code {
        KeyCode::Up => {
            app.cart_selection = app.cart_selection.saturating_sub(1);
        }
        KeyCode::Down => {
            if len > 0 {
                app.cart_selection = (app.cart_selection + 1).min(len - 1);
            }
        }
        KeyCode::Char('x') | KeyCode::Delete => app.remove_selected_cart_line(),
        KeyCode::Char('C') => app.clear_cart(),
        KeyCode::Char('b') | KeyCode::Enter => app.open_booking_form(),
        _ => {}
    }
}

fn handle_search_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            app.state = AppState::Normal;
        }
        KeyCode::Backspace => {
            let mut query = app.package_filter.search.clone();
            query.pop();
            app.set_search(query);
        }
        KeyCode::Char(c) => {
            let mut query = app.package_filter.search.clone();
            query.push(c);
            app.set_search(query);
        }
        _ => {}
    }
    Ok(false)
}

fn handle_booking_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => app.close_form(),
        KeyCode::Tab | KeyCode::Down => {
            app.booking_focus = (app.booking_focus + 1) % (BOOKING_FIELD_COUNT + 1);
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.booking_focus = app
                .booking_focus
                .checked_sub(1)
                .unwrap_or(BOOKING_FIELD_COUNT);
        }
        KeyCode::Enter => {
            if app.booking_focus == BOOKING_FIELD_COUNT {
                app.submit_booking();
            } else {
                app.booking_focus += 1;
            }
        }
        KeyCode::Backspace => {
            let focus = app.booking_focus;
            if let Some(field) = app.booking_field_mut(focus) {
                field.pop();
            }
        }
        KeyCode::Char(c) => {
            let focus = app.booking_focus;
            if let Some(field) = app.booking_field_mut(focus) {
                field.push(c);
            }
        }
        _ => {}
    }
    Ok(false)
}

fn handle_contact_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => app.close_form(),
        KeyCode::Tab | KeyCode::Down => {
            app.contact_focus = (app.contact_focus + 1) % (CONTACT_FIELD_COUNT + 1);
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.contact_focus = app
                .contact_focus
                .checked_sub(1)
                .unwrap_or(CONTACT_FIELD_COUNT);
        }
        KeyCode::Enter => {
            if app.contact_focus == CONTACT_FIELD_COUNT {
                app.submit_contact();
            } else {
                app.contact_focus += 1;
            }
        }
        KeyCode::Backspace => {
            let focus = app.contact_focus;
            if let Some(field) = app.contact_field_mut(focus) {
                field.pop();
            }
        }
        KeyCode::Char(c) => {
            let focus = app.contact_focus;
            if let Some(field) = app.contact_field_mut(focus) {
                field.push(c);
            }
        }
        _ => {}
    }
    Ok(false)
}
