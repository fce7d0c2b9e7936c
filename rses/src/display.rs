use crystal::Crystal;
use rsconsts::*;
use rsesum::Stress;
use vector3::*;

pub fn display_energy(energy: f64, natoms: usize) {
    println!("\n   {:-^88}", " energy ");
    println!();

    println!(
        "   {:<width1$} = {:>width2$.12}",
        "total",
        energy,
        width1 = OUT_WIDTH1,
        width2 = OUT_WIDTH2
    );

    println!(
        "   {:<width1$} = {:>width2$.12}",
        "per ion",
        energy / natoms as f64,
        width1 = OUT_WIDTH1,
        width2 = OUT_WIDTH2
    );
}

pub fn display_force(crystal: &Crystal, force: &[Vector3f64]) {
    println!("\n   {:-^88}", " force (cartesian) ");
    println!();

    let mut net = Vector3f64::zeros();

    for (i, f) in force.iter().enumerate() {
        println!(
            "   {:<3} {:>4} : {:20.12}  {:20.12}  {:20.12}",
            i + 1,
            crystal.get_atom_species()[i],
            f.x,
            f.y,
            f.z
        );

        net += *f;
    }

    println!();
    println!(
        "   {:<8} : {:20.12}  {:20.12}  {:20.12}",
        "net", net.x, net.y, net.z
    );
}

pub fn display_stress(stress: &Stress) {
    println!("\n   {:-^88}", " stress ");
    println!();

    for line in stress.to_string().lines() {
        println!("   {}", line);
    }

    println!();

    let v = stress.voigt();

    println!(
        "   {:>16} {:>16} {:>16} {:>16} {:>16} {:>16}",
        "xx", "yy", "zz", "yz", "xz", "xy"
    );
    println!(
        "   {:16.10} {:16.10} {:16.10} {:16.10} {:16.10} {:16.10}",
        v[0], v[1], v[2], v[3], v[4], v[5]
    );

    println!();
    println!(
        "   {:<width1$} = {:>width2$.12}",
        "pressure",
        stress.pressure(),
        width1 = OUT_WIDTH1,
        width2 = OUT_WIDTH2
    );
}
