// This example shows pretty much a complete treecalc usage. It implements its own renderer for
// drawing onto a Speedy2D canvas, accepts input, evaluates the result, and collapses subtrees which
// are clicked on.
//
// If you are reading these examples to become familiar with treecalc, it is recommended that you
// read the `ascii_calc` example first. This one focuses on implementing a renderer.
//
// The font is loaded at runtime from the path in `TREECALC_FONT`, falling back to `DEFAULT_FONT`.

#[cfg(not(feature = "examples"))]
fn main() {
    eprintln!("you must enable the `examples` feature to run examples.");
}

#[cfg(feature = "examples")]
mod window_calc {
    use std::error::Error;
    use std::rc::Rc;

    use speedy2d::color::Color;
    use speedy2d::dimen::Vector2;
    use speedy2d::font::{Font, FormattedTextBlock, TextLayout, TextOptions};
    use speedy2d::window::{MouseButton, VirtualKeyCode, WindowHandler, WindowHelper};
    use speedy2d::{Graphics2D, Window};

    use treecalc::layout::{Bounds, Point};
    use treecalc::render::Renderer;
    use treecalc::{Evaluable, ExpressionNode, LayoutSettings};

    const DEFAULT_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";

    const NODE_RADIUS: f32 = 18.0;
    const TEXT_SIZE: f32 = 20.0;

    /// Vertical room left above the tree for the input line and the result.
    const TREE_TOP: f32 = 80.0;

    // This is the struct we'll implement `Renderer` on! Here we're holding a reference to the
    // Speedy2D graphics surface and font.
    struct Speedy2DRenderer<'a> {
        graphics: &'a mut Graphics2D,
        font: &'a Font,
    }

    impl<'a> Speedy2DRenderer<'a> {
        fn to_screen(point: Point) -> Vector2<f32> {
            Vector2::new(point.x as f32, point.y as f32 + TREE_TOP)
        }
    }

    impl<'a> Renderer for Speedy2DRenderer<'a> {
        // The window is cleared by the handler before drawing anything else, so there's nothing
        // left to prepare here
        fn init(&mut self, _bounds: Bounds) {}

        fn draw_branch(&mut self, from: Point, to: Point) {
            self.graphics.draw_line(Self::to_screen(from), Self::to_screen(to), 2.0, Color::from_rgb(0.3, 0.3, 0.3));
        }

        fn draw_node(&mut self, label: &str, point: Point) {
            let centre = Self::to_screen(point);
            self.graphics.draw_circle(centre, NODE_RADIUS, Color::from_rgb(0.3, 0.3, 0.3));
            self.graphics.draw_circle(centre, NODE_RADIUS - 2.0, Color::WHITE);

            let text = self.font.layout_text(label, TEXT_SIZE, TextOptions::new());
            let corner = Vector2::new(centre.x - text.width() / 2.0, centre.y - text.height() / 2.0);
            self.graphics.draw_text(corner, Color::BLACK, &text);
        }
    }

    /// The Speedy2D window handler implementation. Holds the text being typed, and the tree it
    /// last parsed into.
    struct WindowCalc {
        font: Font,
        settings: LayoutSettings,
        input: String,
        tree: Option<ExpressionNode>,
        message: String,
        mouse: Vector2<f32>,
    }

    impl WindowCalc {
        fn text(&self, text: &str) -> Rc<FormattedTextBlock> {
            self.font.layout_text(text, TEXT_SIZE, TextOptions::new())
        }

        /// Parses the current input, replacing the displayed tree.
        fn submit(&mut self) {
            match treecalc::parse(&self.input) {
                Ok(tree) => {
                    self.message = describe(tree.evaluate());
                    self.tree = Some(tree);
                }
                Err(err) => {
                    self.message = format!("Parse error: {}", err);
                    self.tree = None;
                }
            }
        }

        /// Collapses whichever node is under the mouse, if there is one.
        fn click(&mut self) {
            let point = Point::new(self.mouse.x as f64, (self.mouse.y - TREE_TOP) as f64);
            let tree = match self.tree.as_mut() {
                Some(tree) => tree,
                None => return,
            };

            let path = match treecalc::layout(&*tree, &self.settings).hit_test(point, NODE_RADIUS as f64) {
                Some(path) => path,
                None => return,
            };

            match tree.collapse_at(&path) {
                Some(Ok(_)) => self.message = describe(tree.evaluate()),
                Some(Err(err)) => self.message = format!("Cannot collapse {}: {}", path, err),
                None => (),
            }
        }
    }

    fn describe(result: Result<f64, treecalc::EvalError>) -> String {
        match result {
            Ok(number) => format!("= {}", number),
            Err(error) => format!("Evaluation error: {}", error),
        }
    }

    impl WindowHandler for WindowCalc {
        fn on_draw(&mut self, helper: &mut WindowHelper, graphics: &mut Graphics2D) {
            graphics.clear_screen(Color::WHITE);

            graphics.draw_text((20.0, 10.0), Color::BLACK, &self.text(&format!("> {}", self.input)));
            graphics.draw_text((20.0, 40.0), Color::BLACK, &self.text(&self.message));

            if let Some(tree) = &self.tree {
                let mut renderer = Speedy2DRenderer { graphics, font: &self.font };
                renderer.draw_all(&treecalc::layout(tree, &self.settings));
            }

            helper.request_redraw();
        }

        fn on_mouse_move(&mut self, _helper: &mut WindowHelper, position: Vector2<f32>) {
            self.mouse = position;
        }

        fn on_mouse_button_down(&mut self, _helper: &mut WindowHelper, button: MouseButton) {
            if button == MouseButton::Left {
                self.click();
            }
        }

        fn on_keyboard_char(&mut self, _helper: &mut WindowHelper, unicode_codepoint: char) {
            if !unicode_codepoint.is_control() {
                self.input.push(unicode_codepoint);
            }
        }

        fn on_key_down(
            &mut self,
            helper: &mut WindowHelper,
            virtual_key_code: Option<VirtualKeyCode>,
            _scancode: speedy2d::window::KeyScancode,
        ) {
            match virtual_key_code {
                Some(VirtualKeyCode::Return) => self.submit(),
                Some(VirtualKeyCode::Backspace) => { self.input.pop(); }
                Some(VirtualKeyCode::Escape) => helper.terminate_loop(),
                _ => (),
            }
        }
    }

    pub fn main() -> Result<(), Box<dyn Error>> {
        env_logger::init();

        let path = std::env::var("TREECALC_FONT").unwrap_or_else(|_| DEFAULT_FONT.to_string());
        let bytes = std::fs::read(&path).map_err(|e| format!("unable to read font {}: {}", path, e))?;
        let font = Font::new(&bytes).map_err(|e| format!("unable to load font {}: {:?}", path, e))?;

        let window = Window::new_centered("Window Calc", (800, 600))
            .map_err(|e| format!("unable to create window: {:?}", e))?;

        window.run_loop(WindowCalc {
            font,
            settings: LayoutSettings { node_spacing: 60.0, level_spacing: 70.0, margin: 40.0, ..Default::default() },
            input: String::new(),
            tree: None,
            message: String::from("Type an expression and press Enter. Click a node to collapse it."),
            mouse: Vector2::new(0.0, 0.0),
        })
    }
}

#[cfg(feature = "examples")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    window_calc::main()
}
