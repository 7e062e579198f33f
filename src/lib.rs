// Copyright 2024, F. Stan
//
// Licensed under the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>,
// This file may not be copied, modified, or distributed
// except according to those terms.

//! CCS811 driver implementing the register level operations of the
//! CCS811 eCO2/TVOC air quality sensor over I2C
//!
//! Operations taken from the [datasheet](https://www.sciosense.com/wp-content/uploads/2020/01/SC-001232-DS-2-CCS811B-Datasheet-Revision-2.pdf)
//!
//! The driver is synchronous and keeps no locks: every call is one or
//! two bus transactions and the caller serializes access to an instance.
//! Nothing is retried.
//!
//! ## Basic Example
//!
//! Obtaining measurements, eCO2, TVOC and the NTC temperature
//!
//!
//!```no_run
//!use ccs811_i2c::ccs811::{Ccs811, DriveMode, CCS811_ADDRESS, DEFAULT_I2C_PATH};
//!use std::thread;
//!use std::time::Duration;
//!
//!fn main() {
//!    // Open the I2C device and start the sensor
//!    let mut ccs = Ccs811::open(DEFAULT_I2C_PATH, CCS811_ADDRESS, DriveMode::Sec1).unwrap();
//!
//!    // Calibrate the thermistor against a known 25 C ambient
//!    while !ccs.available().unwrap() {
//!        thread::sleep(Duration::from_millis(100));
//!    }
//!    let temp = ccs.calculate_temperature().unwrap();
//!    ccs.set_temperature_offset(temp - 25.0);
//!
//!    loop {
//!        match ccs.read_data() {
//!            Ok(Some(0)) => {
//!                let temp = ccs.calculate_temperature().unwrap_or(f32::NAN);
//!                println!("CO2: {} ppm TVOC: {} ppb Temp: {:.1} C", ccs.eco2(), ccs.tvoc(), temp);
//!            }
//!            Ok(Some(code)) => println!("Device error 0x{:02X}", code),
//!            Ok(None) => {}
//!            Err(e) => println!("Error obtaining measurements. More details: {}", e),
//!        }
//!        thread::sleep(Duration::from_secs(2));
//!    }
//!}
//!```
//!

/// Packed sub-field view of byte registers
pub mod bitfield;
/// Register transport, implemented for every i2cdev device
pub mod bus;
/// CCS811 driver, register map and errors
pub mod ccs811;

pub use bitfield::{BitField, Field};
pub use bus::{BusError, RegisterBus};
pub use ccs811::{Ccs811, Ccs811Error, DriveMode};
