use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use lorenz_sim::systems::presets::{self, EnsembleMember, LINE_WIDTH};
use lorenz_sim::systems::LorenzParams;
use lorenz_sim::{solve_ensemble, Ivp, RunConfig};

const MAX_POINTS: usize = 4000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = RunConfig::from_env();
    let grid = config.grid()?;
    let members = presets::butterfly();
    let systems = members
        .iter()
        .map(|m| m.system(grid.clone(), LorenzParams::default()))
        .collect::<Result<Vec<_>, _>>()?;
    let title = systems[0].title();

    let mut curves = Vec::with_capacity(members.len());
    for (member, result) in members.into_iter().zip(solve_ensemble(&systems)) {
        let traj = result?;
        let step = (traj.len() / MAX_POINTS).max(1);
        let points = traj
            .states()
            .iter()
            .step_by(step)
            .map(|u| [u[0], u[1], u[2]])
            .collect();
        curves.push(Curve { member, points });
    }

    let app = LorenzViz { title, curves, yaw_deg: 35.0, elevation_deg: 20.0 };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 900.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Lorenz Attractor",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(app))
        }),
    )?;
    Ok(())
}

struct Curve {
    member: EnsembleMember,
    points: Vec<[f64; 3]>,
}

struct LorenzViz {
    title: String,
    curves: Vec<Curve>,
    yaw_deg: f64,
    elevation_deg: f64,
}

impl LorenzViz {
    /// One plot of all curves, mapping each state through `project`.
    fn projection(
        &self,
        ui: &mut egui::Ui,
        id: &str,
        size: egui::Vec2,
        project: impl Fn(&[f64; 3]) -> [f64; 2],
    ) {
        Plot::new(id)
            .width(size.x)
            .height(size.y)
            .data_aspect(1.0)
            .show_grid(false)
            .legend(Legend::default())
            .show(ui, |plot_ui| {
                for curve in &self.curves {
                    let [r, g, b] = curve.member.color;
                    let points: PlotPoints = curve.points.iter().map(&project).collect();
                    plot_ui.line(
                        Line::new(curve.member.label, points)
                            .color(egui::Color32::from_rgb(r, g, b))
                            .width(LINE_WIDTH),
                    );
                }
            });
    }
}

impl eframe::App for LorenzViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading(self.title.as_str());
            ui.horizontal(|ui| {
                ui.add(egui::Slider::new(&mut self.yaw_deg, -180.0..=180.0).text("yaw (deg)"));
                ui.add(egui::Slider::new(&mut self.elevation_deg, -90.0..=90.0).text("elevation (deg)"));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let half = egui::vec2(available.x / 2.0 - 8.0, available.y / 2.0 - 8.0);

            let (sy, cy) = self.yaw_deg.to_radians().sin_cos();
            let (se, ce) = self.elevation_deg.to_radians().sin_cos();

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label("3D view");
                    self.projection(ui, "oblique", half, |p| {
                        let screen_x = p[0] * cy - p[1] * sy;
                        let depth = p[0] * sy + p[1] * cy;
                        [screen_x, p[2] * ce - depth * se]
                    });
                });
                ui.vertical(|ui| {
                    ui.label("x-z");
                    self.projection(ui, "xz", half, |p| [p[0], p[2]]);
                });
            });

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label("x-y");
                    self.projection(ui, "xy", half, |p| [p[0], p[1]]);
                });
                ui.vertical(|ui| {
                    ui.label("y-z");
                    self.projection(ui, "yz", half, |p| [p[1], p[2]]);
                });
            });
        });
    }
}
