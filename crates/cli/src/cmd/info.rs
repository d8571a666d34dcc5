use modplan_lib::PlatformId;

pub fn cmd_info() {
  println!("System:");
  match PlatformId::current() {
    Some(platform) => println!("Platform: {} ({})", platform, platform.triple()),
    None => println!("Host platform is not a supported target."),
  }
  println!();
  println!("Supported platforms:");
  for platform in PlatformId::ALL {
    println!("  {} ({})", platform, platform.triple());
  }
}
