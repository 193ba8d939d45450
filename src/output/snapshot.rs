//! CSV snapshot output for particle states and per-step trees
//!
//! Two append-only files under the output directory:
//! - `particles.csv`: one row per particle per frame
//! - `tree.csv`: one row per octree node per frame, breadth-first, with
//!   bounding box, centroid, aggregate mass and direct particle count
//!
//! Rows are flushed per frame so a run can be plotted while it is still
//! going.

use std::collections::VecDeque;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::simulation::octree::Octree;
use crate::simulation::states::System;

pub struct SnapshotWriter {
    particle_file: BufWriter<File>,
    tree_file: BufWriter<File>,
}

impl SnapshotWriter {
    /// Create the output directory and both CSV files with headers
    pub fn create(dir: &Path) -> io::Result<Self> {
        fs::create_dir_all(dir)?;

        let mut particle_file = BufWriter::new(File::create(dir.join("particles.csv"))?);
        writeln!(
            particle_file,
            "frame,time,particle_id,pos_x,pos_y,pos_z,vel_x,vel_y,vel_z,mass,radius"
        )?;

        let mut tree_file = BufWriter::new(File::create(dir.join("tree.csv"))?);
        writeln!(
            tree_file,
            "frame,origin_x,origin_y,origin_z,size_x,size_y,size_z,com_x,com_y,com_z,mass,particles"
        )?;

        Ok(Self {
            particle_file,
            tree_file,
        })
    }

    pub fn write_particles(&mut self, frame: usize, sys: &System) -> io::Result<()> {
        for p in &sys.particles {
            let id = p.id.map_or(-1, |id| id as i64); // -1 marks an unassigned id
            writeln!(
                self.particle_file,
                "{},{},{},{},{},{},{},{},{},{},{}",
                frame, sys.t, id, p.x.x, p.x.y, p.x.z, p.v.x, p.v.y, p.v.z, p.m, p.radius
            )?;
        }
        self.particle_file.flush()
    }

    /// Dump every node of the step's tree, breadth-first from the root
    pub fn write_tree(&mut self, frame: usize, tree: &Octree) -> io::Result<()> {
        let mut queue = VecDeque::new();
        queue.push_back(tree.root);

        while let Some(idx) = queue.pop_front() {
            let node = &tree.nodes[idx];
            writeln!(
                self.tree_file,
                "{},{},{},{},{},{},{},{},{},{},{},{}",
                frame,
                node.origin.x,
                node.origin.y,
                node.origin.z,
                node.size.x,
                node.size.y,
                node.size.z,
                node.center_of_mass.x,
                node.center_of_mass.y,
                node.center_of_mass.z,
                node.mass,
                node.particle_count()
            )?;
            if let Some(children) = node.children {
                queue.extend(children);
            }
        }
        self.tree_file.flush()
    }
}
