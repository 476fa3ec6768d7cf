use std::path::PathBuf;

use anyhow::Context;

use annokit::{
    init_logging, AnchorRole, Config, EllipseShape, EventFilter, Image, ImageSize, LineKind,
    LineShape, Point, RectShape, Session, Spacing, WheelEvent,
};

fn main() -> anyhow::Result<()> {
    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => Config::load_from_file(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load_or_default(&Config::default_path()?)?,
    };
    config.validate()?;

    init_logging(&config.logging.filter)?;

    let image = Image::new(
        ImageSize::new(vec![256, 256, 12])?,
        Spacing::new(vec![0.5, 0.5, 2.0])?,
    )?
    .with_unit("mm");
    let mut session = Session::new(&config, image);

    session.bus().subscribe(EventFilter::All, |event| {
        tracing::info!("{}", event.description());
    });

    let ruler = session.add_annotation(LineShape::from_points(
        LineKind::Ruler,
        &[Point::new(10.0, 10.0), Point::new(70.0, 90.0)],
    ))?;
    let protractor = session.add_annotation(LineShape::from_points(
        LineKind::Protractor,
        &[
            Point::new(150.0, 20.0),
            Point::new(120.0, 40.0),
            Point::new(150.0, 60.0),
        ],
    ))?;
    let rect = session.add_annotation(RectShape::new(100.0, 100.0, 40.0, 30.0))?;
    let ellipse =
        session.add_annotation(EllipseShape::new(Point::new(200.0, 200.0), 20.0, 10.0))?;

    session.select(Some(ruler));
    session.drag(&AnchorRole::End, &[Point::new(60.0, 70.0), Point::new(40.0, 50.0)])?;

    session.select(Some(protractor));
    session.drag(&AnchorRole::Mid, &[Point::new(110.0, 40.0)])?;

    session.select(Some(rect));
    session.drag(&AnchorRole::BottomRight, &[Point::new(160.0, 150.0)])?;
    session.undo();
    session.redo();

    session.select(Some(ellipse));
    session.drag(&AnchorRole::TopLeft, &[Point::new(170.0, 180.0)])?;
    session.select(None);

    for _ in 0..3 {
        session.wheel(&WheelEvent::pixels(-60.0));
    }
    session.zoom_in();

    let report = serde_json::json!({
        "annotations": session.summaries(),
        "view": session.view(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
