use itertools::Itertools;
use lattice::{Lattice, LatticeError};
use vector3::*;

use std::{
    fmt,
    fs::File,
    io::{BufRead, BufReader},
};

#[derive(Debug)]
pub enum CrystalError {
    Io(String, std::io::Error),
    /// 1-based line number and what is wrong with it
    Malformed(usize, String),
    /// fewer than the scale line plus three lattice vectors
    MissingLattice(usize),
    NoAtoms,
    Lattice(LatticeError),
}

impl fmt::Display for CrystalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrystalError::Io(file, e) => write!(f, "cannot read {}: {}", file, e),
            CrystalError::Malformed(line, msg) => write!(f, "line {}: {}", line, msg),
            CrystalError::MissingLattice(found) => write!(
                f,
                "expected a scale line and three lattice vectors, found {} lines",
                found
            ),
            CrystalError::NoAtoms => write!(f, "no atoms found"),
            CrystalError::Lattice(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CrystalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CrystalError::Io(_, e) => Some(e),
            CrystalError::Lattice(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LatticeError> for CrystalError {
    fn from(e: LatticeError) -> Self {
        CrystalError::Lattice(e)
    }
}

// Periodic point-charge structure.
//
// - lattice vectors already multiplied by their scale factors
// - atomic positions stored in fractional coordinates
// - one charge per atom, in the units the caller works in
#[derive(Debug, Clone)]
pub struct Crystal {
    scale: [f64; 3],
    latt: Lattice,
    atom_positions: Vec<Vector3f64>,
    atom_species: Vec<String>,
    atom_charges: Vec<f64>,
}

impl Crystal {
    pub fn read_file(inpfile: &str) -> Result<Crystal, CrystalError> {
        let file = File::open(inpfile).map_err(|e| CrystalError::Io(inpfile.to_string(), e))?;

        let lines = BufReader::new(file)
            .lines()
            .collect::<Result<Vec<String>, std::io::Error>>()
            .map_err(|e| CrystalError::Io(inpfile.to_string(), e))?;

        Crystal::from_lines(&lines)
    }

    // line 1: scale_a scale_b scale_c
    // line 2-4: lattice vectors a, b, c
    // remaining lines: symbol charge x y z (fractional)
    pub fn from_lines(lines: &[String]) -> Result<Crystal, CrystalError> {
        // keep the file line number for error messages
        let records: Vec<(usize, Vec<&str>)> = lines
            .iter()
            .enumerate()
            .map(|(i, line)| (i + 1, line.split_whitespace().collect::<Vec<&str>>()))
            .filter(|(_, s)| !s.is_empty())
            .collect();

        if records.len() < 4 {
            return Err(CrystalError::MissingLattice(records.len()));
        }

        let scale = parse_triple(records[0].0, &records[0].1)?;

        let mut vecs = [[0.0; 3]; 3];

        for (k, (iline, s)) in records[1..4].iter().enumerate() {
            vecs[k] = parse_triple(*iline, s)?;

            for v in vecs[k].iter_mut() {
                *v *= scale[k];
            }
        }

        let latt = Lattice::new(&vecs[0], &vecs[1], &vecs[2])?;

        let mut atom_positions = Vec::new();
        let mut atom_species = Vec::new();
        let mut atom_charges = Vec::new();

        for (iline, s) in records[4..].iter() {
            if s.len() < 5 {
                return Err(CrystalError::Malformed(
                    *iline,
                    format!("expected 'symbol charge x y z', found '{}'", s.join(" ")),
                ));
            }

            let charge = parse_number(*iline, s[1])?;
            let pos = parse_triple(*iline, &s[2..5])?;

            atom_species.push(s[0].to_string());
            atom_charges.push(charge);
            atom_positions.push(Vector3f64::from_array(pos));
        }

        if atom_positions.is_empty() {
            return Err(CrystalError::NoAtoms);
        }

        Ok(Crystal {
            scale,
            latt,
            atom_positions,
            atom_species,
            atom_charges,
        })
    }

    pub fn get_latt(&self) -> &Lattice {
        &self.latt
    }

    pub fn get_scale(&self) -> &[f64; 3] {
        &self.scale
    }

    pub fn get_n_atoms(&self) -> usize {
        self.atom_positions.len()
    }

    pub fn get_atom_positions(&self) -> &[Vector3f64] {
        &self.atom_positions
    }

    pub fn get_atom_positions_cart(&self) -> Vec<Vector3f64> {
        self.atom_positions
            .iter()
            .map(|p| self.latt.frac_to_cart(p))
            .collect()
    }

    pub fn get_atom_species(&self) -> &[String] {
        &self.atom_species
    }

    pub fn get_atom_charges(&self) -> &[f64] {
        &self.atom_charges
    }

    pub fn get_total_charge(&self) -> f64 {
        self.atom_charges.iter().sum()
    }

    pub fn get_unique_species(&self) -> Vec<String> {
        // first-occurrence order
        self.atom_species.iter().cloned().unique().collect()
    }

    pub fn get_atom_indices_of_specie(&self, sp: &str) -> Vec<usize> {
        self.atom_species
            .iter()
            .positions(|s| s == sp)
            .collect()
    }

    pub fn display(&self) {
        println!("   {:-^88}", " crystal structure ");
        println!();

        println!("   lattice_vectors");
        println!();

        let vec_a = self.latt.get_vector_a();
        println!(
            "   a = {:20.12}  {:20.12}  {:20.12}",
            vec_a.x, vec_a.y, vec_a.z
        );

        let vec_b = self.latt.get_vector_b();
        println!(
            "   b = {:20.12}  {:20.12}  {:20.12}",
            vec_b.x, vec_b.y, vec_b.z
        );

        let vec_c = self.latt.get_vector_c();
        println!(
            "   c = {:20.12}  {:20.12}  {:20.12}",
            vec_c.x, vec_c.y, vec_c.z
        );

        println!();
        println!("   volume = {:.12}", self.latt.abs_volume());
        println!();
        println!("   natoms = {}", self.get_n_atoms());
        println!("   atom_positions\n");
        println!("                        charge            fractional                                                cartesian");
        println!();

        for (i, (atom, pos_c)) in self
            .atom_positions
            .iter()
            .zip(self.get_atom_positions_cart().iter())
            .enumerate()
        {
            println!(
                "   {:<3} {:>4} {:>10.4} : {:16.12}  {:16.12}  {:16.12}  {:20.12}  {:20.12}  {:20.12}",
                i + 1,
                self.atom_species[i],
                self.atom_charges[i],
                atom.x,
                atom.y,
                atom.z,
                pos_c.x,
                pos_c.y,
                pos_c.z
            );
        }

        println!();

        for sp in self.get_unique_species().iter() {
            println!(
                "   {} : {:?}",
                sp,
                self.get_atom_indices_of_specie(sp)
                    .iter()
                    .map(|x| x + 1)
                    .collect::<Vec<usize>>()
            );
        }

        println!();
        println!("   total charge = {:.12}", self.get_total_charge());
        println!();
    }
}

fn parse_number(iline: usize, s: &str) -> Result<f64, CrystalError> {
    s.parse::<f64>()
        .map_err(|_| CrystalError::Malformed(iline, format!("'{}' is not a number", s)))
}

fn parse_triple(iline: usize, s: &[&str]) -> Result<[f64; 3], CrystalError> {
    if s.len() < 3 {
        return Err(CrystalError::Malformed(
            iline,
            format!("expected three numbers, found '{}'", s.join(" ")),
        ));
    }

    Ok([
        parse_number(iline, s[0])?,
        parse_number(iline, s[1])?,
        parse_number(iline, s[2])?,
    ])
}
