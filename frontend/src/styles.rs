pub const PAGE_LIGHT: &str = "min-h-screen bg-gray-50 text-gray-900 transition-colors duration-300";
pub const PAGE_DARK: &str = "min-h-screen bg-gray-900 text-white transition-colors duration-300";
pub const CONTAINER: &str = "container mx-auto px-2 sm:px-4 py-4 sm:py-6 flex flex-col min-h-screen max-w-7xl";
pub const HEADER: &str = "flex flex-col sm:flex-row justify-between items-center mb-4 sm:mb-6 px-2 sm:px-4";
pub const TITLE: &str = "text-3xl sm:text-4xl md:text-5xl font-bold text-transparent bg-clip-text bg-gradient-to-r from-purple-400 to-pink-600 mb-2";
pub const MAIN_GRID: &str = "flex-grow grid lg:grid-cols-2 gap-4 sm:gap-8";
pub const ICON_BUTTON_LIGHT: &str = "p-1 sm:p-2 rounded-full hover:bg-gray-200 transition-colors text-xl";
pub const ICON_BUTTON_DARK: &str = "p-1 sm:p-2 rounded-full hover:bg-gray-700 transition-colors text-xl";
pub const FORM: &str = "flex gap-2 w-full max-w-xs sm:max-w-md mb-2";
pub const INPUT_LIGHT: &str = "flex-grow px-2 sm:px-4 py-1 sm:py-2 text-sm sm:text-base rounded-lg border bg-white border-gray-300 focus:outline-none focus:ring-2 focus:ring-purple-500";
pub const INPUT_DARK: &str = "flex-grow px-2 sm:px-4 py-1 sm:py-2 text-sm sm:text-base rounded-lg border bg-gray-800 border-gray-700 text-white focus:outline-none focus:ring-2 focus:ring-purple-500";
pub const BUTTON_PRIMARY: &str = "bg-gradient-to-r from-purple-500 to-pink-500 text-white px-2 sm:px-4 py-1 sm:py-2 rounded-lg hover:from-purple-600 hover:to-pink-600 transition-all duration-300 flex items-center gap-1 sm:gap-2 whitespace-nowrap text-sm sm:text-base";
pub const SPIN_BUTTON: &str = "absolute bottom-0 px-8 py-3 rounded-full text-lg font-semibold text-white transition-all duration-300 shadow-lg hover:shadow-xl bg-gradient-to-r from-purple-500 to-pink-500 hover:from-purple-600 hover:to-pink-600";
pub const SPIN_BUTTON_DISABLED: &str = "absolute bottom-0 px-8 py-3 rounded-full text-lg font-semibold text-white transition-all duration-300 shadow-lg bg-gray-400 cursor-not-allowed";
pub const CARD_LIGHT: &str = "p-3 sm:p-6 rounded-xl bg-white shadow-lg";
pub const CARD_DARK: &str = "p-3 sm:p-6 rounded-xl bg-gray-800 shadow-lg";
pub const CARD_HEADER: &str = "flex justify-between items-center mb-2 sm:mb-4";
pub const CARD_TITLE: &str = "text-lg sm:text-xl font-semibold";
pub const LIST: &str = "space-y-1 sm:space-y-2 max-h-[150px] sm:max-h-[200px] overflow-y-auto";
pub const LIST_ITEM_LIGHT: &str = "flex justify-between items-center p-1 sm:p-2 rounded text-sm sm:text-base bg-gray-50";
pub const LIST_ITEM_DARK: &str = "flex justify-between items-center p-1 sm:p-2 rounded text-sm sm:text-base bg-gray-700";
pub const BUTTON_DANGER_TEXT: &str = "text-red-500 hover:text-red-600 transition-colors disabled:opacity-40";
pub const BUTTON_RESET_TEXT: &str = "text-blue-500 hover:text-blue-600 transition-colors disabled:opacity-40";
pub const TEXT_ERROR: &str = "text-sm text-red-500 dark:text-red-400 mb-4";
pub const TEXT_SMALL: &str = "text-xs sm:text-sm opacity-75";
pub const MODAL_BACKDROP: &str = "fixed inset-0 flex items-center justify-center p-4 bg-black bg-opacity-50 z-50";
pub const MODAL_LIGHT: &str = "bg-white p-8 rounded-2xl shadow-xl max-w-md w-full mx-4 relative";
pub const MODAL_DARK: &str = "bg-gray-800 p-8 rounded-2xl shadow-xl max-w-md w-full mx-4 relative";

pub fn themed(dark_mode: bool, light: &'static str, dark: &'static str) -> &'static str {
    if dark_mode {
        dark
    } else {
        light
    }
}
