pub const BG_PAGE: &str = "bg-gray-900 min-h-screen";
pub const CONTAINER: &str = "max-w-[1124px] min-h-screen mx-auto px-6 flex items-center";

pub const HEADING_LG: &str = "mt-14 text-white text-5xl font-bold leading-tight";
pub const TEXT_MUTED: &str = "text-sm text-gray-300 leading-relaxed";
pub const TEXT_HIGHLIGHT: &str = "text-green-500";

pub const INPUT_BASE: &str = "flex-1 px-6 py-4 rounded bg-gray-800 border border-gray-600 text-sm text-gray-100 focus:outline-none focus:border-yellow-500";
pub const BUTTON_SUBMIT: &str = "px-6 py-4 rounded bg-yellow-500 text-gray-900 font-bold text-sm uppercase hover:bg-yellow-700 transition-colors";

pub const FORM_ROW: &str = "mt-10 flex gap-2";
pub const STATS_ROW: &str = "mt-10 pt-10 border-t border-gray-600 text-gray-100 flex justify-between";
pub const STAT_VALUE: &str = "font-bold text-2xl";
pub const STAT_DIVIDER: &str = "w-px h-14 bg-gray-600";

pub const ALERT_CARD: &str = "p-4 rounded-lg shadow-md mb-6";

pub fn combine_classes(base: &str, additional: &str) -> String {
    format!("{} {}", base, additional)
}

pub fn error_alert() -> String {
    combine_classes(ALERT_CARD, "bg-red-500 text-white shadow-lg")
}

#[cfg(test)]
mod tests {
    use super::{error_alert, ALERT_CARD};

    #[test]
    fn test_error_alert_classes() {
        let classes = error_alert();
        assert!(classes.starts_with(ALERT_CARD));
        assert!(classes.contains("bg-red-500"));
    }
}
