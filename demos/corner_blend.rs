use svgmorph::{compile, morph, one_hot, uniform};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // The same box with four corner radii, from sharp to fully rounded.
    let radii = [0.0, 2.0, 4.0, 8.0];
    let variants: Vec<String> = radii
        .iter()
        .map(|r| format!("M{r} 0 L16 0 L16 16 L0 16 L0 {r} Q0 0 {r} 0 Z"))
        .collect();

    let set = compile(&variants)?;
    println!(
        "compiled {} variants of a {}-command path",
        set.path_count(),
        set.command_count()
    );

    for (idx, radius) in radii.iter().enumerate() {
        let d = morph(&set, &one_hot(set.path_count(), idx)?)?;
        println!("radius {radius}: {d}");
    }

    println!("average:  {}", morph(&set, &uniform(set.path_count()))?);

    // Sweep from the sharpest corner to the roundest.
    for step in 0..=4 {
        let t = f64::from(step) / 4.0;
        let d = morph(&set, &[1.0 - t, 0.0, 0.0, t])?;
        println!("t={t:.2}:   {d}");
    }

    Ok(())
}
