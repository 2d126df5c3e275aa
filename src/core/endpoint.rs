/// Builds the AJAX endpoint for a widget handler. Widgets are addressed by
/// position on their page, handlers by name:
/// `{base}/_{index}/_ajax/{handler}`.
pub fn ajax_url(base: &str, index: usize, handler: &str) -> String {
    format!("{}/_{}/_ajax/{}", base.trim_end_matches('/'), index, handler)
}
