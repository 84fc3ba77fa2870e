// SPDX: CC0-1.0

use anyhow::Context;
use chrono::{DateTime, Local};
use conic_refine::{
    config::Config,
    eval::{Conic, CrossLines},
    fit,
    formula::Formula,
    points,
    refine::Tick,
    session::Session,
    shell::{self, Command},
    svg,
    view::ViewBox,
    Number, Point, Surface,
};
use core::fmt::Debug;
use std::{
    fs::OpenOptions,
    io::{stdout, BufWriter, Write},
    process::ExitCode,
    sync::Arc,
    thread,
};

const OUTPUT_RES: [Number; 2] = [1398.0, 760.0];
const GRAPH_MIN: Number = -2.0;
const GRAPH_MAX: Number = 16.0;

fn output_svg_filename(now: DateTime<Local>) -> String {
    format!(
        "{}_output-{}.{}",
        env!("CARGO_PKG_NAME"),
        now.format("%Y-%m-%d_%H-%M-%S"),
        "svg"
    )
}

fn main() -> ExitCode {
    env_logger::init();
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("unexpected error: {err}");
            let chain = err.chain();
            if chain.len() > 1 {
                eprintln!();
                eprintln!("context:");
                for it in chain.skip(1) {
                    eprintln!("  {it}");
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cross = args.iter().any(|arg| arg == "cross");
    let points_path = args.iter().find(|arg| *arg != "cross");

    let cfg = Config::from_env().context("invalid configuration")?;
    let view = ViewBox::new(GRAPH_MIN..GRAPH_MAX, GRAPH_MIN..GRAPH_MAX)
        .context("invalid view bounds")?;
    let [w, h] = OUTPUT_RES;
    let surface = Surface::new(w, h);
    let points = points_path.map(points::load_or_empty).unwrap_or_default();

    if cross {
        run(Session::<CrossLines>::new(&cfg, view, surface, points), &cfg)
    } else {
        run(Session::<Conic>::new(&cfg, view, surface, points), &cfg)
    }
}

fn run<C>(mut session: Session<C>, cfg: &Config) -> anyhow::Result<()>
where
    C: Formula + Default + Debug,
{
    let mut stdout = BufWriter::new(stdout());
    writeln!(stdout, "{} reference points", session.points.len())?;
    loop {
        writeln!(stdout, "{}", session.curve.render())?;

        let mut try_cmd = shell::input(&mut stdout, "> ")?;
        try_cmd.make_ascii_lowercase();
        writeln!(stdout)?;

        if let Ok(cmd) = try_cmd.parse::<Command>() {
            match cmd {
                Command::Help => {
                    for c in Command::exhaustive() {
                        writeln!(stdout, "{name}: {help}", name = c.name(), help = c.help())?;
                    }
                }

                Command::Quit => break,

                Command::Formula => read_formula(&mut stdout, &mut session)?,

                Command::Show => {
                    writeln!(stdout, "formula = {}", session.curve.render())?;
                    for (name, val) in session.curve.names().iter().zip(session.curve.params()) {
                        writeln!(stdout, "  {name} = {val}")?;
                    }
                    writeln!(stdout, "view = {:#}", session.view)?;
                }

                Command::Set => set_param(&mut stdout, &mut session)?,

                Command::Origin => set_origin(&mut stdout, &mut session)?,

                Command::Reset => {
                    if let Some(parsed) = session.reset() {
                        shell::report_rejected(&mut stdout, &parsed.rejected)?;
                    }
                    writeln!(stdout, "reset to {}", session.formula())?;
                }

                Command::Refine => refine(&mut stdout, &mut session, cfg)?,

                Command::Score => {
                    writeln!(stdout, "{}", fit::error_label(session.score()))?;
                }

                Command::Plot => plot(&mut stdout, &session)?,
            }
        } else {
            let names = Command::exhaustive().iter().map(|c| c.name());
            if let Some(name) = shell::most_similar(&try_cmd, names) {
                writeln!(stdout, r#"Unknown command, did you mean "{name}"?"#)?;
            } else {
                writeln!(stdout, r#"Unknown command, try "help" for help"#)?;
            }
        }

        writeln!(stdout)?;
    }
    stdout.flush()?;
    Ok(())
}

fn read_formula<W: Write, C: Formula + Default>(
    mut out: W,
    session: &mut Session<C>,
) -> anyhow::Result<()> {
    let input = shell::input(&mut out, "formula = ")?;
    if input.is_empty() {
        return Ok(());
    }

    let parsed = session.read_formula(&Arc::new(input));
    shell::report_rejected(&mut out, &parsed.rejected)?;
    let arity = session.curve.params().len();
    if !parsed.is_complete(arity) {
        writeln!(
            out,
            "note: found {} of {arity} numbers, the rest keep their values",
            parsed.assigned
        )?;
    }
    Ok(())
}

fn set_param<W: Write, C: Formula + Default>(
    mut out: W,
    session: &mut Session<C>,
) -> anyhow::Result<()> {
    let name = shell::input(&mut out, "name = ")?.to_ascii_lowercase();
    let idx = match session.param_index(&name) {
        Some(idx) => idx,
        None => {
            writeln!(out, "error: no parameter named '{name}'")?;
            let names = session.curve.names().iter().copied();
            if let Some(similar) = shell::most_similar(&name, names) {
                writeln!(out, "note: parameter '{similar}' has a similar name")?;
            }
            return Ok(());
        }
    };

    let bounds = session.bounds().clone();
    writeln!(
        out,
        "note: values are clamped to [{}, {}]",
        bounds.start(),
        bounds.end()
    )?;
    let cur = session.curve.params()[idx];
    match shell::read_fromstr::<_, Number>(
        &mut out,
        format_args!("?{name} (is {cur}) = "),
        true,
    )? {
        Ok(Some(new)) => match session.set_param(idx, new) {
            Some(stored) => writeln!(out, "{name} = {stored}")?,
            None => writeln!(out, "error: {name} must be a finite number")?,
        },
        Ok(None) | Err(_) => {}
    }
    Ok(())
}

fn set_origin<W: Write, C: Formula + Default>(
    mut out: W,
    session: &mut Session<C>,
) -> anyhow::Result<()> {
    writeln!(out, "note: leave blank to skip")?;
    let mut origin = session.view.origin;
    for (name, dst) in [("x0", &mut origin.x), ("y0", &mut origin.y)] {
        match shell::read_fromstr::<_, Number>(
            &mut out,
            format_args!("?{name} (is {cur}) = ", cur = *dst),
            true,
        )? {
            Ok(Some(new)) => *dst = new,
            Ok(None) => {}
            Err(_) => return Ok(()),
        }
    }
    match session.move_origin(origin) {
        Some(Point { x, y }) => writeln!(out, "origin = ({x}, {y})")?,
        None => writeln!(out, "error: origin must be finite")?,
    }
    Ok(())
}

fn refine<W: Write, C: Formula + Default>(
    mut out: W,
    session: &mut Session<C>,
    cfg: &Config,
) -> anyhow::Result<()> {
    loop {
        match session.tick() {
            Tick::Swept(report) => {
                let label = session
                    .last_frame()
                    .map(|frame| frame.error_label.as_str())
                    .unwrap_or_default();
                writeln!(
                    out,
                    "step {step} drew {drawn} points {label}{restart}",
                    step = report.step,
                    drawn = report.drawn,
                    restart = if report.restarted { " (restarted)" } else { "" },
                )?;
                out.flush()?;
                if report.converged {
                    break;
                }
            }
            Tick::Idle => {
                writeln!(out, "nothing changed, already refined")?;
                break;
            }
            Tick::Skipped => break,
        }
        thread::sleep(cfg.frame_interval);
    }
    writeln!(out, "formula = {}", session.formula())?;
    Ok(())
}

fn plot<W: Write, C: Formula + Default>(mut out: W, session: &Session<C>) -> anyhow::Result<()> {
    let frame = if let Some(frame) = session.last_frame() {
        frame
    } else {
        writeln!(out, r#"error: nothing drawn yet, try "refine" first"#)?;
        return Ok(());
    };

    let path = output_svg_filename(Local::now());
    let mut file = BufWriter::new(
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .context("failed to open output svg file")?,
    );
    svg::write_frame(&mut file, frame, session.surface)
        .context("failed to write to output svg file")?;
    file.flush()?;
    file.get_mut().sync_data()?;
    drop(file);

    writeln!(out, "wrote {path} (step {})", frame.step)?;
    Ok(())
}
