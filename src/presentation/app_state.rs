// Application state for HTTP handlers
use crate::application::view_controller::ViewController;
use crate::infrastructure::config::PageSettings;
use crate::presentation::chart_options::ChartOptions;

#[derive(Clone)]
pub struct AppState {
    pub controller: ViewController,
    pub page: PageSettings,
    pub chart_options: ChartOptions,
}
