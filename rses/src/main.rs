use control::Control;
use crystal::Crystal;
use rsesum::*;

use std::error::Error;

mod display;

fn main() {
    // RUST_LOG overrides the default filter

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run("in.ctrl", "in.crystal") {
        eprintln!("{}", error_message(e.as_ref()));

        std::process::exit(1);
    }
}

fn error_message(e: &dyn Error) -> String {
    format!("Error: {}", e)
}

fn run(ctrl_file: &str, crystal_file: &str) -> Result<(), Box<dyn Error>> {
    // start the timer-main

    let stopwatch_main = std::time::Instant::now();

    // read in control parameters

    let mut control = Control::new();
    control.read_file(ctrl_file)?;

    control.display();

    // read in crystal

    let crystal = Crystal::read_file(crystal_file)?;

    if control.is_verbose() {
        crystal.display();
    }

    // ions and kernel parameters

    let latt = crystal.get_latt();

    let (ions, params) = build_inputs(&control, &crystal)?;

    log::info!(
        "{} ions, rc = {}, rd = {}, task = {}",
        ions.get_n_ions(),
        params.get_rc(),
        params.get_rd(),
        control.get_task()
    );

    // real-space sum

    if control.needs_energy() && control.needs_force() && control.needs_stress() {
        let sum = RealSpaceSum::new(latt, &ions, &params)?;

        display::display_energy(sum.get_energy(), ions.get_n_ions());
        display::display_force(&crystal, sum.get_force());
        display::display_stress(sum.get_stress());
    } else {
        if control.needs_energy() {
            let energy = compute_energy(latt, &ions, &params)?;
            display::display_energy(energy, ions.get_n_ions());
        }

        if control.needs_force() {
            let force = compute_force(latt, &ions, &params)?;
            display::display_force(&crystal, &force);
        }

        if control.needs_stress() {
            let stress = compute_stress(latt, &ions, &params)?;
            display::display_stress(&stress);
        }
    }

    // computing time statistics

    println!();
    println!("   {:-^88}", " statistics ");
    println!();
    let elapsed_main_seconds = stopwatch_main.elapsed().as_secs_f64();
    println!(
        "   {:16}{:5}{:16.2} seconds {:16.2} hours",
        "Total",
        ":",
        elapsed_main_seconds,
        elapsed_main_seconds / 3600.0
    );

    Ok(())
}

fn build_inputs(control: &Control, crystal: &Crystal) -> Result<(Ions, Parameters), SumError> {
    let ions = Ions::new(
        crystal.get_atom_positions_cart(),
        crystal.get_atom_charges().to_vec(),
    )?;

    let parallelism = if control.get_parallel() {
        Parallelism::Rayon
    } else {
        Parallelism::Serial
    };

    let params = Parameters::new(control.get_rc(), control.get_rd())?
        .with_neutrality(control.get_charge_neutral())
        .with_parallelism(parallelism);

    Ok((ions, params))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_file(name: &str) -> String {
        let mut d = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        d.push("demo");
        d.push(name);

        d.to_str().unwrap().to_string()
    }

    fn demo_inputs() -> (Control, Crystal) {
        let mut control = Control::new();
        control.read_file(&demo_file("in.ctrl")).unwrap();

        let crystal = Crystal::read_file(&demo_file("in.crystal")).unwrap();

        (control, crystal)
    }

    #[test]
    fn test_demo_inputs_run() {
        let (control, crystal) = demo_inputs();

        let (ions, params) = build_inputs(&control, &crystal).unwrap();

        // alpha quartz carries net charge +48 and relies on the background term
        assert!((crystal.get_total_charge() - 48.0).abs() < 1E-12);

        let sum = RealSpaceSum::new(crystal.get_latt(), &ions, &params).unwrap();

        let e_per_ion = sum.get_energy() / ions.get_n_ions() as f64;
        assert!((e_per_ion + 69.48809871723248932 / 9.0).abs() < 1E-9);

        run(&demo_file("in.ctrl"), &demo_file("in.crystal")).unwrap();
    }

    #[test]
    fn test_charged_cell_rejected_with_readable_message() {
        let (_, crystal) = demo_inputs();

        let lines: Vec<String> = ["rc = 12.0", "rd = 2.0", "charge_neutral = true"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let mut control = Control::new();
        control.parse_lines(&lines).unwrap();

        let (ions, params) = build_inputs(&control, &crystal).unwrap();

        let err = match RealSpaceSum::new(crystal.get_latt(), &ions, &params) {
            Err(e) => e,
            Ok(_) => panic!("charged cell accepted"),
        };

        assert_eq!(
            error_message(&err),
            "Error: Cell is not charge neutral: total charge = 4.8e1"
        );
    }
}
