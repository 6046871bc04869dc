use alcove_core::prelude::*;
use alcove_ui::*;

fn app() -> View {
    Column(Modifier::new().padding(24.0)).child((
        Text("Sign in").size(20.0),
        Input(
            InputProps::new().field(
                FieldProps::new()
                    .hint("Email")
                    .keyboard(Keyboard::Email)
                    .extra("autocomplete", "email")
                    .on_change(|s| log::info!("email: {s}")),
            ),
        ),
        Input(
            InputProps::new()
                .height(44.0)
                .border_color("#bbb")
                .field(FieldProps::new().hint("Password").secure(true)),
        ),
        // override layer wins over the explicit background
        Input(
            InputProps::new()
                .width(220.0)
                .background("white")
                .container_style(Modifier::new().background(Color::from_hex("#f6f6f6"))),
        ),
    ))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // A 393px-wide phone with slightly enlarged system text.
    let metrics = ScreenMetrics {
        width: 393.0,
        height: 852.0,
    };
    let tree = with_screen_metrics(metrics, || with_font_scale(FontScale(1.1), app));

    log::info!("resolved tree:\n{tree:#?}");
    println!(
        "input width {:.1}px, height {:.1}px on a {:.0}px screen",
        tree.children[1].modifier.width.unwrap_or_default(),
        tree.children[1].modifier.height.unwrap_or_default(),
        metrics.width,
    );
    Ok(())
}
