// This example shows how to parse an expression typed by the user, evaluate it, and draw its tree.
//
// This example doesn't implement a renderer - we're using the `AsciiRenderer` built into treecalc.
// For an example which does implement its own renderer, refer to `window_calc`.
//
// Type an expression and press Enter. Press Esc, or enter `exit`, to quit.

#[cfg(not(feature = "examples"))]
fn main() {
    eprintln!("you must enable the `examples` feature to run examples.");
}

#[cfg(feature = "examples")]
mod ascii_calc {
    use std::error::Error;
    use std::io::{stdin, stdout, Write};

    use termion::event::Key;
    use termion::input::TermRead;
    use termion::raw::IntoRawMode;

    use treecalc::render::Renderer;
    use treecalc::renderers::AsciiRenderer;
    use treecalc::LayoutSettings;

    const PROMPT: &str = "> ";

    pub fn main() -> Result<(), Box<dyn Error>> {
        env_logger::init();

        // Terminal setup using termion
        let stdin = stdin();
        let mut stdout = stdout().into_raw_mode()?;

        // The expression currently being typed, and what was printed for the last one entered
        let mut input = String::new();
        let mut output: Vec<String> = vec![];

        write!(stdout, "{}{}{}", termion::clear::All, termion::cursor::Goto(1, 1), PROMPT)?;
        stdout.flush()?;

        // This is an infinite loop which iterates when a key is pressed
        for k in stdin.keys() {
            match k? {
                Key::Esc | Key::Ctrl('c') => break,
                Key::Char('\n') => {
                    if input.trim() == "exit" {
                        break;
                    }
                    output = run(&input);
                    input.clear();
                }
                Key::Char(c) => input.push(c),
                Key::Backspace => { input.pop(); }
                _ => (),
            }

            // Move the cursor back up to the top left
            write!(stdout, "{}{}", termion::cursor::Goto(1, 1), termion::clear::All)?;

            // Raw mode doesn't translate newlines, so every line needs its own carriage return
            for line in output.iter() {
                write!(stdout, "{}\r\n", line)?;
            }
            if !output.is_empty() {
                write!(stdout, "\r\n===================================\r\n")?;
            }
            write!(stdout, "{}{}", PROMPT, input)?;

            // Ensure everything is printed
            stdout.flush()?;
        }

        write!(stdout, "\r\n")?;
        Ok(())
    }

    /// Parses and evaluates `text`, returning the lines to show for it.
    fn run(text: &str) -> Vec<String> {
        let tree = match treecalc::parse(text) {
            Ok(tree) => tree,
            Err(err) => return vec![format!("Parse error: {}", err)],
        };

        // `draw_all` lays out glyph positions and draws them onto the renderer's buffer of lines
        let mut renderer = AsciiRenderer::default();
        renderer.draw_all(&treecalc::layout(&tree, &LayoutSettings::default()));

        let mut lines = vec![format!("{}", tree), String::new()];
        lines.extend(renderer.lines.iter().map(|line| line.trim_end().to_string()));
        lines.push(String::new());
        lines.push(match treecalc::evaluate(&tree) {
            Ok(result) => format!("= {}", result),
            Err(err) => format!("Evaluation error: {}", err),
        });
        lines
    }
}

#[cfg(feature = "examples")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    ascii_calc::main()
}
