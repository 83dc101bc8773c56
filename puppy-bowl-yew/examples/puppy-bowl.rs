use puppy_bowl_yew::App;

fn main() {
    // Initialize tracing for WASM
    tracing_wasm::set_as_global_default();

    tracing::info!("Starting Puppy Bowl");

    yew::Renderer::<App>::new().render();
}
