pub mod gravsim_vis3d;
