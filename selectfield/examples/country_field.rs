//! Select Field Example
//!
//! Demonstrates the select field controller without a rendering backend:
//! - Grouped option universe with country leaves
//! - Derived label shrink and clear state
//! - Change handling and the value shapes reported to the owner

use std::fs::File;

use log::LevelFilter;
use selectfield::prelude::*;
use simplelog::{Config, WriteLogger};

fn main() {
    // Initialize file logging
    if let Ok(log_file) = File::create("country_field.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    // Option universe: two continents, country leaves underneath.
    let options = vec![
        RawOption::from(SelectOption::group(
            "Europe",
            vec![
                SelectOption::leaf("Portugal", "pt"),
                SelectOption::leaf("Belgium", "be"),
            ],
        )),
        RawOption::from(SelectOption::group(
            "Asia",
            vec![
                SelectOption::leaf("Japan", "jp"),
                SelectOption::leaf("Vietnam", "vn"),
            ],
        )),
    ];

    let props = SelectProps::new(options, |value, option| {
        println!("owner got value {:?} (option present: {})", value, option.is_some());
    })
    .id("country")
    .label("Country")
    .helper_text("Where you live")
    .clearable();

    let field = SelectField::new(&props);

    let view = field.view(&props);
    println!("label shrunk before interaction: {}", view.label.shrink);
    println!("helper text element: {:?}", view.helper_text.id);

    // Simulate the dropdown widget: focus, pick Portugal, blur.
    field.handle_focus(&FocusEvent::default(), &props);
    let pick = resolve_single(&view.dropdown.options, &OptionValue::from("pt")).map(Selection::One);
    field.handle_change(pick, &props);
    field.handle_blur(&FocusEvent::default(), &props);

    let view = field.view(&props);
    println!("label shrunk after selection: {}", view.label.shrink);
    println!("clear affordance offered: {}", view.dropdown.behavior.is_clearable);

    // Clearing reports a null value and no option payload.
    field.handle_change(None, &props);
}
