use photokeeper::library::Library;

pub struct AppState {
    pub active_library: Option<Library>,
}
