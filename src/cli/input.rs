/// Asks for source text in the user's editor.
///
/// # Errors
///
/// Returns the prompt error when the editor cannot be launched or the
/// prompt is cancelled.
pub fn get_user_input() -> Result<String, inquire::InquireError> {
    inquire::Editor::new("Source to scan:")
        .with_file_extension(".c")
        .with_render_config(description_render_config())
        .prompt()
}

fn description_render_config() -> inquire::ui::RenderConfig<'static> {
    inquire::ui::RenderConfig::default().with_canceled_prompt_indicator(
        inquire::ui::Styled::new("<skipped>").with_fg(inquire::ui::Color::DarkYellow),
    )
}
